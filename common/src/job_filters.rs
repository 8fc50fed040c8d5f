//! Filter schema for job postings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::FilterError,
    query_string::QueryPairs,
    search_query::{FilterSchema, NumericRange, SortField, normalize_opt, normalize_set, toggle_opt, toggle_set},
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilters {
    pub category_id: Option<String>,
    pub skill_ids: BTreeSet<String>,
    pub location: Option<String>,
    pub salary: NumericRange,
    pub job_types: BTreeSet<String>,
    pub experience_levels: BTreeSet<String>,
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobFilterField {
    Category,
    Skill,
    Location,
    JobType,
    ExperienceLevel,
    Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobSortKey {
    #[default]
    CreatedAt,
    Title,
    Salary,
    Deadline,
}

impl SortField for JobSortKey {
    const ALL: &'static [Self] = &[Self::CreatedAt, Self::Title, Self::Salary, Self::Deadline];

    fn as_param(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Title => "title",
            Self::Salary => "salary",
            Self::Deadline => "deadline",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::CreatedAt => "Date posted",
            Self::Title => "Title",
            Self::Salary => "Salary",
            Self::Deadline => "Application deadline",
        }
    }
}

impl FilterSchema for JobFilters {
    type Sort = JobSortKey;
    type Field = JobFilterField;

    fn normalize(&mut self) {
        normalize_opt(&mut self.category_id);
        normalize_set(&mut self.skill_ids);
        normalize_opt(&mut self.location);
        normalize_set(&mut self.job_types);
        normalize_set(&mut self.experience_levels);
        normalize_opt(&mut self.company_id);
    }

    fn validate(&self) -> Result<(), FilterError> {
        self.salary.validate("salary")
    }

    fn toggle(&mut self, field: JobFilterField, value: &str) {
        match field {
            JobFilterField::Category => toggle_opt(&mut self.category_id, value),
            JobFilterField::Skill => toggle_set(&mut self.skill_ids, value),
            JobFilterField::Location => toggle_opt(&mut self.location, value),
            JobFilterField::JobType => toggle_set(&mut self.job_types, value),
            JobFilterField::ExperienceLevel => toggle_set(&mut self.experience_levels, value),
            JobFilterField::Company => toggle_opt(&mut self.company_id, value),
        }
    }

    fn is_selected(&self, field: JobFilterField, value: &str) -> bool {
        match field {
            JobFilterField::Category => self.category_id.as_deref() == Some(value),
            JobFilterField::Skill => self.skill_ids.contains(value),
            JobFilterField::Location => self.location.as_deref() == Some(value),
            JobFilterField::JobType => self.job_types.contains(value),
            JobFilterField::ExperienceLevel => self.experience_levels.contains(value),
            JobFilterField::Company => self.company_id.as_deref() == Some(value),
        }
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    fn write_pairs(&self, out: &mut QueryPairs) {
        out.push_opt("categoryId", self.category_id.as_deref());
        out.push_all("skillIds", &self.skill_ids);
        out.push_opt("location", self.location.as_deref());
        out.push_range("minSalary", "maxSalary", &self.salary);
        out.push_all("jobType", &self.job_types);
        out.push_all("experienceLevel", &self.experience_levels);
        out.push_opt("companyId", self.company_id.as_deref());
    }

    fn read_pairs(pairs: &QueryPairs) -> Self {
        Self {
            category_id: pairs.get_string("categoryId"),
            skill_ids: pairs.get_all("skillIds"),
            location: pairs.get_string("location"),
            salary: pairs.get_range("minSalary", "maxSalary"),
            job_types: pairs.get_all("jobType"),
            experience_levels: pairs.get_all("experienceLevel"),
            company_id: pairs.get_string("companyId"),
        }
    }
}
