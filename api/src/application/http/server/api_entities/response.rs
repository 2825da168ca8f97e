use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use sajian_core::domain::common::queries::PageMeta;

pub const STATUS_SUCCESS: &str = "SWT-00-000";

/// Bilingual status message carried on every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusMessage {
    pub english: String,
    pub indonesia: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusSchema {
    pub status_code: String,
    pub status_message: StatusMessage,
}

impl StatusSchema {
    pub fn success() -> Self {
        Self {
            status_code: STATUS_SUCCESS.to_string(),
            status_message: StatusMessage {
                english: "Success".to_string(),
                indonesia: "Berhasil".to_string(),
            },
        }
    }

    pub fn error(status_code: &str, english: &str, indonesia: &str) -> Self {
        Self {
            status_code: status_code.to_string(),
            status_message: StatusMessage {
                english: english.to_string(),
                indonesia: indonesia.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationSchema {
    pub total_count: u64,
    pub current_page: i64,
    pub total_pages: i64,
    pub page_size: i64,
}

impl From<PageMeta> for PaginationSchema {
    fn from(meta: PageMeta) -> Self {
        Self {
            total_count: meta.total_count,
            current_page: meta.current_page,
            total_pages: meta.total_pages,
            page_size: meta.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSchema<T> {
    pub data: T,
    pub pagination: PaginationSchema,
}

/// The wire envelope every endpoint answers with. Callers depend on the
/// exact field names, including the bilingual status block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status_schema: StatusSchema,
    pub data_schema: DataSchema<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Single-item envelope: the pagination block is present but zero-valued.
    pub fn single(data: T) -> Self {
        Self {
            status_schema: StatusSchema::success(),
            data_schema: DataSchema {
                data,
                pagination: PaginationSchema::default(),
            },
        }
    }

    pub fn page(data: T, meta: PageMeta) -> Self {
        Self {
            status_schema: StatusSchema::success(),
            data_schema: DataSchema {
                data,
                pagination: meta.into(),
            },
        }
    }
}

impl Envelope<serde_json::Value> {
    pub fn error(status: StatusSchema) -> Self {
        Self {
            status_schema: status,
            data_schema: DataSchema {
                data: serde_json::Value::Null,
                pagination: PaginationSchema::default(),
            },
        }
    }
}

pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    Page(Vec<T>, PageMeta),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(Envelope::single(data))).into_response(),
            Response::Created(data) => {
                (StatusCode::CREATED, Json(Envelope::single(data))).into_response()
            }
            Response::Page(items, meta) => {
                (StatusCode::OK, Json(Envelope::page(items, meta))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_item_envelope_has_zeroed_pagination() {
        let envelope = Envelope::single(json!({"name": "Mains"}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status_schema"]["status_code"], "SWT-00-000");
        assert_eq!(value["status_schema"]["status_message"]["english"], "Success");
        assert_eq!(
            value["status_schema"]["status_message"]["indonesia"],
            "Berhasil"
        );
        assert_eq!(value["data_schema"]["data"]["name"], "Mains");
        assert_eq!(value["data_schema"]["pagination"]["total_count"], 0);
        assert_eq!(value["data_schema"]["pagination"]["current_page"], 0);
        assert_eq!(value["data_schema"]["pagination"]["total_pages"], 0);
        assert_eq!(value["data_schema"]["pagination"]["page_size"], 0);
    }

    #[test]
    fn list_envelope_carries_the_computed_pagination() {
        let meta = PageMeta::new(25, 2, 10);
        let envelope = Envelope::page(vec![json!({"i": 1}), json!({"i": 2})], meta);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["data_schema"]["data"].as_array().unwrap().len(), 2);
        assert_eq!(value["data_schema"]["pagination"]["total_count"], 25);
        assert_eq!(value["data_schema"]["pagination"]["current_page"], 2);
        assert_eq!(value["data_schema"]["pagination"]["total_pages"], 3);
        assert_eq!(value["data_schema"]["pagination"]["page_size"], 10);
    }
}
