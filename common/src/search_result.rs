use serde::{Deserialize, Serialize};


/// Anything the listing endpoints return in `data`.
pub trait ResultItem {
    fn item_id(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    #[serde(flatten)]
    pub pagination: PaginationMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub skills: Vec<String>,
    pub created_at: Option<String>,
}

impl ResultItem for JobItem {
    fn item_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub experience_years: Option<u32>,
    pub availability: Option<String>,
    pub skills: Vec<String>,
}

impl ResultItem for CandidateItem {
    fn item_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_response_reads_flat_pagination() {
        let body = r#"{
            "data": [{"_id": "j1", "title": "Rust dev"}, {"_id": "j2"}],
            "currentPage": 1,
            "totalPages": 3,
            "totalItems": 25,
            "hasNextPage": true,
            "hasPreviousPage": false
        }"#;
        let page: PageResponse<JobItem> = serde_json::from_str(body).expect("decode");
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].item_id(), "j1");
        assert_eq!(page.data[1].title, "");
        assert_eq!(page.pagination.total_items, 25);
        assert!(page.pagination.has_next_page);
    }
}
