//! Response schemas sent with each structured-output request.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// JSON shape the model must answer with. Every object field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSchema {
    String {
        description: &'static str,
    },
    Array {
        description: &'static str,
        items: Box<ResponseSchema>,
    },
    Object {
        fields: Vec<Field>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub schema: ResponseSchema,
}

fn field(name: &'static str, schema: ResponseSchema) -> Field {
    Field { name, schema }
}

fn string(description: &'static str) -> ResponseSchema {
    ResponseSchema::String { description }
}

impl ResponseSchema {
    /// `{ title, content }`
    #[must_use]
    pub fn article() -> Self {
        Self::Object {
            fields: vec![
                field("title", string("An engaging title for the article in German.")),
                field(
                    "content",
                    string(
                        "The full article text in German, approximately 150-200 words long, \
                         suitable for an intermediate learner.",
                    ),
                ),
            ],
        }
    }

    /// `[{ question, options, correctAnswer, explanation }]`
    #[must_use]
    pub fn quiz() -> Self {
        Self::Array {
            description: "Multiple-choice vocabulary questions about the article.",
            items: Box::new(Self::Object {
                fields: vec![
                    field("question", string("A German word from the article.")),
                    field(
                        "options",
                        Self::Array {
                            description: "Four English translations for the German word.",
                            items: Box::new(string("A candidate English translation.")),
                        },
                    ),
                    field(
                        "correctAnswer",
                        string("The correct English translation, copied from the options."),
                    ),
                    field(
                        "explanation",
                        string("A brief explanation of the word, its usage, or why the answer is correct."),
                    ),
                ],
            }),
        }
    }

    /// `{ translation, explanation }`
    #[must_use]
    pub fn translation() -> Self {
        Self::Object {
            fields: vec![
                field("translation", string("The English translation of the German word.")),
                field(
                    "explanation",
                    string("A simple, one-sentence explanation of the word's meaning or usage."),
                ),
            ],
        }
    }
}

struct Properties<'a>(&'a [Field]);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(field.name, &field.schema)?;
        }
        map.end()
    }
}

impl Serialize for ResponseSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String { description } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "STRING")?;
                map.serialize_entry("description", description)?;
                map.end()
            }
            Self::Array { description, items } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "ARRAY")?;
                map.serialize_entry("description", description)?;
                map.serialize_entry("items", items.as_ref())?;
                map.end()
            }
            Self::Object { fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.name).collect();
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "OBJECT")?;
                map.serialize_entry("properties", &Properties(fields))?;
                map.serialize_entry("required", &names)?;
                map.serialize_entry("propertyOrdering", &names)?;
                map.end()
            }
        }
    }
}
