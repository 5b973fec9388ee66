//!
//! This module implements pretty-printing for runtime values and their
//! types.

use colored::Color;
use dynaval_prettify::{PrettyPrintable, PrettyPrintablePiece, Styled, pretty_printable_string};

use crate::{
    props::{Prop, PropsTable},
    values::{RuntimeValue, ValueType},
};

impl PrettyPrintable for RuntimeValue {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        match self {
            RuntimeValue::Void => PrettyPrintablePiece::colored_atomic("void", Color::BrightBlack),

            RuntimeValue::Null => PrettyPrintablePiece::colored_atomic("null", Color::BrightYellow),

            RuntimeValue::Bool(bool) => {
                PrettyPrintablePiece::colored_atomic(bool.to_string(), Color::BrightYellow)
            }

            RuntimeValue::Int(int) => {
                PrettyPrintablePiece::colored_atomic(int.to_string(), Color::BrightYellow)
            }

            RuntimeValue::Float(float) => {
                PrettyPrintablePiece::colored_atomic(float.to_string(), Color::BrightYellow)
            }

            RuntimeValue::String(string) => pretty_printable_string(string),

            RuntimeValue::BoxedString(cell) => {
                let boxed = cell.read();

                let mut pieces = vec![
                    PrettyPrintablePiece::colored_atomic("string(", Color::Blue),
                    pretty_printable_string(&boxed.text),
                    PrettyPrintablePiece::colored_atomic(")", Color::Blue),
                ];

                if !boxed.props.is_empty() {
                    pieces.push(props_pretty_data(
                        &boxed.props,
                        Styled::colored(" {", Color::Blue),
                        Styled::colored("}", Color::Blue),
                    ));
                }

                PrettyPrintablePiece::Join(pieces)
            }

            RuntimeValue::List(cell) => {
                let list = cell.read();

                let mut items: Vec<PrettyPrintablePiece> = list
                    .items
                    .iter()
                    .map(|item| item.generate_pretty_data())
                    .collect();

                items.extend(
                    list.props
                        .iter()
                        .map(|(key, prop)| prop_pretty_data(key, prop)),
                );

                PrettyPrintablePiece::List {
                    begin: Styled::colored("[", Color::Blue),
                    items,
                    sep: Styled::colored(",", Color::Blue),
                    end: Styled::colored("]", Color::Blue),
                    suffix: None,
                }
            }

            RuntimeValue::Struct(cell) => props_pretty_data(
                &cell.read().props,
                Styled::colored("{", Color::Blue),
                Styled::colored("}", Color::Blue),
            ),

            RuntimeValue::Function(cell) => {
                let func = cell.read();

                PrettyPrintablePiece::colored_atomic(
                    match &func.name {
                        Some(name) => format!("fn {name}(...)"),
                        None => "fn(...)".to_owned(),
                    },
                    Color::Magenta,
                )
            }

            RuntimeValue::Symbol(symbol) => PrettyPrintablePiece::Join(vec![
                PrettyPrintablePiece::colored_atomic("symbol(", Color::Magenta),
                match symbol.description() {
                    Some(description) => pretty_printable_string(description),
                    None => PrettyPrintablePiece::Empty,
                },
                PrettyPrintablePiece::colored_atomic(")", Color::Magenta),
            ]),

            RuntimeValue::Custom(custom) => custom.generate_pretty_data(),
        }
    }
}

impl PrettyPrintable for ValueType {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        PrettyPrintablePiece::colored_atomic(self.to_string(), Color::Magenta)
    }
}

fn props_pretty_data(props: &PropsTable, begin: Styled, end: Styled) -> PrettyPrintablePiece {
    PrettyPrintablePiece::List {
        begin,
        items: props
            .iter()
            .map(|(key, prop)| prop_pretty_data(key, prop))
            .collect(),
        sep: Styled::colored(",", Color::Blue),
        end,
        suffix: None,
    }
}

// Non-enumerable slots are rendered dimmed
fn prop_pretty_data(key: &str, prop: &Prop) -> PrettyPrintablePiece {
    let key_color = if prop.enumerable {
        Color::Red
    } else {
        Color::BrightBlack
    };

    PrettyPrintablePiece::Join(vec![
        PrettyPrintablePiece::colored_atomic(key, key_color),
        PrettyPrintablePiece::colored_atomic(": ", Color::Blue),
        prop.value.generate_pretty_data(),
    ])
}
