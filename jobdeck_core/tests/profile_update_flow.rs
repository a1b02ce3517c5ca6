// End-to-end profile editing and submission against a mock user service.

use jobdeck_core::api::UserApiClient;
use jobdeck_core::profile_form::{Attachment, ProfileForm, ScalarField};
use jobdeck_core::record_list::ExperienceField;
use jobdeck_core::types::User;
use mockito::Matcher;

fn success_body(fullname: &str) -> String {
    format!(
        r#"{{
            "success": true,
            "message": "Profile updated successfully",
            "user": {{
                "fullname": "{fullname}",
                "email": "ada@example.com",
                "phoneNumber": "5550100",
                "profile": {{
                    "bio": "Analyst",
                    "skills": ["math", "rust"],
                    "experience": [],
                    "education": []
                }}
            }}
        }}"#
    )
}

#[test]
fn edit_empty_profile_then_submit() {
    // Start from an empty profile, add two experience entries, name the
    // first, drop the second.
    let mut form = ProfileForm::from_user(&User::default());
    form.experience.add();
    form.experience.add();
    form.experience
        .set_field(0, ExperienceField::Title, "Engineer".to_string());
    form.experience.remove(1);

    assert_eq!(form.experience.len(), 1);
    assert_eq!(form.experience.get(0).unwrap().title, "Engineer");

    form.set_scalar(ScalarField::Fullname, "Ada Lovelace".to_string());

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/profile/update")
        .match_body(Matcher::Regex("Engineer".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body("Ada Lovelace"))
        .expect(1)
        .create();

    let client = UserApiClient::new(server.url()).unwrap();
    let response = client.update_profile(&form.to_payload()).unwrap();

    assert!(response.success);
    assert_eq!(response.message, "Profile updated successfully");
    let user = response.user.expect("success response carries the user");
    assert_eq!(user.fullname, "Ada Lovelace");
    mock.assert();
}

#[test]
fn failed_submit_preserves_form_state() {
    let mut form = ProfileForm::from_user(&User::default());
    form.experience.add();
    form.experience
        .set_field(0, ExperienceField::Title, "Engineer".to_string());
    form.education.add();
    let before = form.clone();

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/profile/update")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Invalid email"}"#)
        .create();

    let client = UserApiClient::new(server.url()).unwrap();
    let err = client.update_profile(&form.to_payload()).unwrap_err();

    assert_eq!(err.user_message(), "Invalid email");
    // In-progress edits survive the failed attempt untouched.
    assert_eq!(form, before);
}

#[test]
fn attachment_is_sent_as_file_part() {
    let mut form = ProfileForm::from_user(&User::default());
    form.set_attachment(Some(Attachment {
        filename: "resume.pdf".to_string(),
        bytes: b"%PDF-1.4 fake".to_vec(),
    }));

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/profile/update")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("resume.pdf".to_string()),
            Matcher::Regex("name=\"file\"".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body("Ada Lovelace"))
        .create();

    let client = UserApiClient::new(server.url()).unwrap();
    client.update_profile(&form.to_payload()).unwrap();
    mock.assert();
}

#[test]
fn success_false_in_ok_response_is_returned_to_caller() {
    // The service can answer 200 with success=false; the envelope comes back
    // as data, not as an error, and the caller surfaces the message.
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/profile/update")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Invalid email"}"#)
        .create();

    let client = UserApiClient::new(server.url()).unwrap();
    let form = ProfileForm::from_user(&User::default());
    let response = client.update_profile(&form.to_payload()).unwrap();

    assert!(!response.success);
    assert_eq!(response.message, "Invalid email");
    assert!(response.user.is_none());
}
