/// Profile-update form state: scalar fields, the two record lists, and an
/// optional resume attachment, flattened into one multipart payload on submit.
use crate::record_list::RecordList;
use crate::types::{EducationRecord, ExperienceRecord, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarField {
    Fullname,
    Email,
    PhoneNumber,
    Bio,
    Skills,
}

impl ScalarField {
    pub const ALL: [ScalarField; 5] = [
        ScalarField::Fullname,
        ScalarField::Email,
        ScalarField::PhoneNumber,
        ScalarField::Bio,
        ScalarField::Skills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScalarField::Fullname => "Name",
            ScalarField::Email => "Email",
            ScalarField::PhoneNumber => "Number",
            ScalarField::Bio => "Bio",
            ScalarField::Skills => "Skills",
        }
    }
}

/// In-memory file attachment; at most one per form, later sets overwrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Transport payload for one profile-update request. The record lists are
/// flattened to single JSON text fields so they fit the multipart format the
/// user service expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatePayload {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub bio: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub attachment: Option<Attachment>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    fullname: String,
    email: String,
    phone_number: String,
    bio: String,
    skills: String,
    pub experience: RecordList<ExperienceRecord>,
    pub education: RecordList<EducationRecord>,
    attachment: Option<Attachment>,
}

impl ProfileForm {
    /// Project a session user into editable form state. Skills collapse to a
    /// comma-separated string; absent lists come through as empty lists.
    pub fn from_user(user: &User) -> Self {
        Self {
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            bio: user.profile.bio.clone(),
            skills: user.profile.skills.join(","),
            experience: RecordList::from_records(user.profile.experience.clone()),
            education: RecordList::from_records(user.profile.education.clone()),
            attachment: None,
        }
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Fullname => &self.fullname,
            ScalarField::Email => &self.email,
            ScalarField::PhoneNumber => &self.phone_number,
            ScalarField::Bio => &self.bio,
            ScalarField::Skills => &self.skills,
        }
    }

    /// Direct replace, no validation.
    pub fn set_scalar(&mut self, field: ScalarField, value: String) {
        match field {
            ScalarField::Fullname => self.fullname = value,
            ScalarField::Email => self.email = value,
            ScalarField::PhoneNumber => self.phone_number = value,
            ScalarField::Bio => self.bio = value,
            ScalarField::Skills => self.skills = value,
        }
    }

    pub fn set_attachment(&mut self, attachment: Option<Attachment>) {
        self.attachment = attachment;
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Flatten the form into one outbound payload. The record lists serialize
    /// whole, in order; string-only records, so encoding cannot fail in
    /// practice and an empty list is the fallback.
    pub fn to_payload(&self) -> UpdatePayload {
        UpdatePayload {
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            bio: self.bio.clone(),
            skills: self.skills.clone(),
            experience: serde_json::to_string(self.experience.records())
                .unwrap_or_else(|_| "[]".to_string()),
            education: serde_json::to_string(self.education.records())
                .unwrap_or_else(|_| "[]".to_string()),
            attachment: self.attachment.clone(),
        }
    }
}
