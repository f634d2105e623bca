use serde::{Deserialize, Serialize};

use super::common::{Keyed, Ref};

/// A department. Populated references may carry only `_id` and `name`,
/// so everything else defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Keyed for Department {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A job title within a department.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub department: Ref<Department>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Keyed for Designation {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Designation {
    /// Department name, resolved from the populated ref or from `departments`.
    pub fn department_name<'a>(&'a self, departments: &'a [Department]) -> &'a str {
        self.department
            .resolve(departments)
            .map(|d| d.name.as_str())
            .unwrap_or("Unknown Department")
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> u8 {
    1
}

/// Body of `POST /departments` and `PUT /departments/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub name: String,
    pub description: String,
    pub code: String,
}

impl From<&Department> for DepartmentDraft {
    fn from(dept: &Department) -> Self {
        Self {
            name: dept.name.clone(),
            description: dept.description.clone(),
            code: dept.code.clone(),
        }
    }
}

/// Body of `POST /designations` and `PUT /designations/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignationDraft {
    pub title: String,
    pub description: String,
    pub level: u8,
    /// Department id.
    pub department: String,
}

impl Default for DesignationDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            level: default_level(),
            department: String::new(),
        }
    }
}

impl From<&Designation> for DesignationDraft {
    fn from(desig: &Designation) -> Self {
        Self {
            title: desig.title.clone(),
            description: desig.description.clone(),
            level: desig.level,
            department: desig.department.id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designation_with_populated_department() {
        let json = r#"{"_id":"desig-3","title":"HR Manager","description":"Policy","level":5,
            "department":{"_id":"dept-2","name":"Human Resources"},"isActive":true,
            "createdAt":"2024-01-15T10:00:00.000Z"}"#;
        let desig: Designation = serde_json::from_str(json).unwrap();
        assert_eq!(desig.department.id(), "dept-2");
        assert_eq!(desig.department_name(&[]), "Human Resources");
        assert_eq!(DesignationDraft::from(&desig).department, "dept-2");
    }

    #[test]
    fn designation_with_bare_department_id() {
        let json = r#"{"_id":"desig-1","title":"Software Engineer","level":3,"department":"dept-1"}"#;
        let desig: Designation = serde_json::from_str(json).unwrap();
        let known = vec![Department {
            id: "dept-1".into(),
            name: "Engineering".into(),
            ..Department::default()
        }];
        assert_eq!(desig.department_name(&known), "Engineering");
        assert_eq!(desig.department_name(&[]), "Unknown Department");
        assert!(desig.is_active);
    }
}
