/// Session user source for the CLI: a JSON fixture on disk, or the built-in
/// demo user when none is given. The real session store lives behind the
/// user-service API.
use crate::types::{EducationRecord, ExperienceRecord, Profile, User};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_user(path: impl AsRef<Path>) -> Result<User, ProfileError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let user: User = serde_json::from_reader(reader)?;
    Ok(user)
}

/// Built-in sample profile for running without a fixture.
pub fn demo_user() -> User {
    User {
        fullname: "Patel Mernstack".to_string(),
        email: "patel@example.com".to_string(),
        phone_number: "8080808080".to_string(),
        profile: Profile {
            bio: "Full stack developer exploring new roles".to_string(),
            skills: vec![
                "Html".to_string(),
                "Css".to_string(),
                "Javascript".to_string(),
                "Reactjs".to_string(),
            ],
            resume: None,
            experience: vec![ExperienceRecord {
                title: "Frontend Developer".to_string(),
                company: "Pixel Labs".to_string(),
                start_date: "2021-06-01T00:00:00.000Z".to_string(),
                end_date: "2023-12-31T00:00:00.000Z".to_string(),
                description: "Built dashboard components".to_string(),
            }],
            education: vec![EducationRecord {
                degree: "BSc Computer Science".to_string(),
                institution: "State University".to_string(),
                start_date: "2017-08-01T00:00:00.000Z".to_string(),
                end_date: "2021-05-31T00:00:00.000Z".to_string(),
                description: String::new(),
            }],
        },
    }
}
