use crate::error::CadastroError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Body accepted by `POST /add_task`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePersonRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "observacao")]
    pub note: Option<String>,
}

impl CreatePersonRequest {
    /// A name that is absent, null or blank is rejected.
    pub fn validate(self) -> Result<NewPerson, CadastroError> {
        match self.name {
            Some(name) if !name.trim().is_empty() => Ok(NewPerson {
                name,
                phone: self.phone,
                note: self.note,
            }),
            _ => Err(CadastroError::MissingName),
        }
    }
}

/// Validated input for a single insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub phone: Option<String>,
    pub note: Option<String>,
}

/// A row of the `pessoas` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PersonRecord {
    pub id: i64,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "telefone")]
    pub phone: Option<String>,
    #[sqlx(rename = "observacao")]
    pub note: Option<String>,
}

impl PersonRecord {
    pub fn from_insert(id: i64, person: NewPerson) -> Self {
        Self {
            id,
            name: person.name,
            phone: person.phone,
            note: person.note,
        }
    }
}

/// Response for a created record. The note is stored but not echoed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedPerson {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
}

impl From<PersonRecord> for CreatedPerson {
    fn from(r: PersonRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            phone: r.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreatePersonRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn full_request_validates() {
        let person = request(json!({"nome": "Ana", "telefone": "123", "observacao": "vip"}))
            .validate()
            .unwrap();
        assert_eq!(
            person,
            NewPerson {
                name: "Ana".to_string(),
                phone: Some("123".to_string()),
                note: Some("vip".to_string()),
            }
        );
    }

    #[test]
    fn absent_null_and_blank_names_are_rejected() {
        for body in [
            json!({"telefone": "123"}),
            json!({"nome": null}),
            json!({"nome": ""}),
            json!({"nome": "   "}),
        ] {
            assert!(matches!(
                request(body).validate(),
                Err(CadastroError::MissingName)
            ));
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let person = request(json!({"nome": "Bob", "idade": 40})).validate().unwrap();
        assert_eq!(person.phone, None);
        assert_eq!(person.note, None);
    }

    #[test]
    fn created_person_echoes_null_phone_and_hides_note() {
        let record = PersonRecord {
            id: 2,
            name: "Bob".to_string(),
            phone: None,
            note: Some("hidden".to_string()),
        };
        let body = serde_json::to_value(CreatedPerson::from(record)).unwrap();
        assert_eq!(body, json!({"id": 2, "nome": "Bob", "telefone": null}));
    }
}
