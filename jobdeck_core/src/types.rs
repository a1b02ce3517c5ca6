use serde::{Deserialize, Serialize};

/// One employment entry on a profile.
///
/// Dates are carried as ISO date-time strings end to end; the UI shows only
/// the date portion. Nothing here validates their contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, rename = "startDate")]
    pub start_date: String,
    #[serde(default, rename = "endDate")]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

/// One education entry on a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default, rename = "startDate")]
    pub start_date: String,
    #[serde(default, rename = "endDate")]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
}

/// User entity as served by the external user service. A missing `profile`
/// object deserializes to the empty default, so the editors always start from
/// well-defined (possibly empty) lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(default)]
    pub profile: Profile,
}

/// Response envelope of the profile-update endpoint. `user` is present when
/// `success` is true and becomes the new session user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Accent tag for a category card; the UI maps it to a terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Pink,
    Amber,
}

/// A job category in the fixed, ordered catalog. Names are unique and serve
/// as the rendering key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

/// The built-in category catalog, in display order.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category {
            name: "Frontend Developer",
            icon: "</>",
            accent: Accent::Blue,
        },
        Category {
            name: "Backend Developer",
            icon: "[db]",
            accent: Accent::Green,
        },
        Category {
            name: "Data Science",
            icon: "(~)",
            accent: Accent::Purple,
        },
        Category {
            name: "Graphic Designer",
            icon: "(*)",
            accent: Accent::Pink,
        },
        Category {
            name: "FullStack Developer",
            icon: "<=>",
            accent: Accent::Amber,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_nonempty_unique_names() {
        let categories = default_categories();
        assert!(!categories.is_empty());

        let mut names: Vec<&str> = categories.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), categories.len());
    }

    #[test]
    fn test_user_deserializes_without_profile() {
        let user: User =
            serde_json::from_str(r#"{"fullname":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(user.fullname, "Ada");
        assert!(user.profile.experience.is_empty());
        assert!(user.profile.education.is_empty());
    }

    #[test]
    fn test_experience_uses_camel_case_dates() {
        let record: ExperienceRecord = serde_json::from_str(
            r#"{"title":"Engineer","company":"Acme","startDate":"2021-03-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(record.start_date, "2021-03-01T00:00:00.000Z");
        assert_eq!(record.end_date, "");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"endDate\""));
    }
}
