use super::*;
use serde_json::json;

#[test]
fn auth_session_decodes_backend_payload() {
    let session: AuthSession = serde_json::from_value(json!({
        "access_token": "tok123",
        "token_type": "bearer",
        "user_id": "u1",
        "user_data": {
            "email": "dev@example.com",
            "full_name": "Dev One",
            "skills": ["rust", "sql"],
        },
    }))
    .unwrap();

    assert_eq!(session.access_token, "tok123");
    assert_eq!(session.user_id, "u1");
    assert_eq!(session.user_data.skills, vec!["rust", "sql"]);
}

#[test]
fn into_profile_combines_record_with_id() {
    let session: AuthSession = serde_json::from_value(json!({
        "access_token": "tok123",
        "user_id": "u1",
        "user_data": { "email": "dev@example.com", "full_name": "Dev One" },
    }))
    .unwrap();

    let profile = session.into_profile();
    assert_eq!(profile.id, "u1");
    assert_eq!(profile.email, "dev@example.com");
    assert_eq!(profile.full_name, "Dev One");
    // Fields the auth endpoint never sends take their defaults.
    assert_eq!(profile.experience_level, "entry");
    assert!(profile.resume_url.is_empty());
}

#[test]
fn sparse_profile_decodes_with_defaults() {
    let profile: UserProfile =
        serde_json::from_value(json!({ "id": "u2", "email": "two@example.com" })).unwrap();

    assert_eq!(profile.id, "u2");
    assert_eq!(profile.experience_level, "entry");
    assert!(profile.skills.is_empty());
    assert!(profile.location.is_empty());
}

#[test]
fn profile_update_serializes_only_set_fields() {
    let update = ProfileUpdate {
        skills: Some(vec!["rust".to_owned()]),
        location: Some("Berlin".to_owned()),
        ..ProfileUpdate::default()
    };

    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, json!({ "skills": ["rust"], "location": "Berlin" }));
}

#[test]
fn match_kind_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_value(MatchKind::Jobs).unwrap(), json!("jobs"));
    assert_eq!(
        serde_json::to_value(MatchKind::Internships).unwrap(),
        json!("internships")
    );
    assert_eq!(serde_json::to_value(MatchKind::All).unwrap(), json!("all"));
}

#[test]
fn match_request_serializes_backend_shape() {
    let request = MatchRequest {
        user_id: "u1".to_owned(),
        match_type: MatchKind::Internships,
        limit: 10,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({ "user_id": "u1", "match_type": "internships", "limit": 10 })
    );
}

#[test]
fn match_listing_resolves_job_key() {
    let hit: Match = serde_json::from_value(json!({
        "job": { "id": "j1", "title": "Backend Engineer", "company": "Acme" },
        "match_score": 82.5,
        "rejection_probability": 20.0,
        "rejection_risk": "low",
        "skill_match": { "matched": ["rust"], "missing": ["k8s"] },
    }))
    .unwrap();

    let listing = hit.listing().unwrap();
    assert_eq!(listing.title(), "Backend Engineer");
    assert_eq!(listing.company(), "Acme");
    assert!(matches!(listing, MatchListing::Job(_)));
}

#[test]
fn match_listing_resolves_internship_key() {
    let hit: Match = serde_json::from_value(json!({
        "internship": { "id": "i1", "title": "Data Intern", "company": "Beta" },
        "match_score": 64.0,
        "rejection_probability": 45.0,
    }))
    .unwrap();

    assert!(matches!(
        hit.listing(),
        Some(MatchListing::Internship(internship)) if internship.title == "Data Intern"
    ));
}

#[test]
fn match_without_listing_yields_none() {
    let hit: Match = serde_json::from_value(json!({
        "match_score": 10.0,
        "rejection_probability": 90.0,
    }))
    .unwrap();

    assert!(hit.listing().is_none());
}

#[test]
fn match_response_carries_advisory_message() {
    let response: MatchResponse = serde_json::from_value(json!({
        "matches": [],
        "total_matches": 0,
        "message": "Add skills to your profile to get matches",
    }))
    .unwrap();

    assert!(response.matches.is_empty());
    assert_eq!(
        response.message.as_deref(),
        Some("Add skills to your profile to get matches")
    );
}

#[test]
fn jobs_list_decodes_sparse_entries() {
    let list: JobsList = serde_json::from_value(json!({
        "total": 1,
        "jobs": [{ "id": "j1", "title": "SRE", "salary_min": 60000, "salary_max": null }],
    }))
    .unwrap();

    assert_eq!(list.total, 1);
    assert_eq!(list.jobs[0].salary_min, Some(60_000));
    assert_eq!(list.jobs[0].salary_max, None);
    assert!(list.jobs[0].source.is_empty());
}

#[test]
fn user_statistics_decode() {
    let stats: UserStatistics = serde_json::from_value(json!({
        "user_id": "u1",
        "skills_count": 3,
        "skills": ["rust", "sql", "python"],
        "experience_level": "mid",
        "total_applications": 8,
        "accepted": 2,
        "rejected": 4,
        "pending": 2,
        "success_rate": 25.0,
    }))
    .unwrap();

    assert_eq!(stats.skills_count, 3);
    assert!((stats.success_rate - 25.0).abs() < f64::EPSILON);
}

#[test]
fn chat_reply_text_prefers_response_field() {
    let both = ChatReply {
        response: Some("from response".to_owned()),
        message: Some("from message".to_owned()),
    };
    assert_eq!(both.text(), Some("from response"));

    let legacy: ChatReply = serde_json::from_value(json!({ "message": "legacy" })).unwrap();
    assert_eq!(legacy.text(), Some("legacy"));

    assert_eq!(ChatReply::default().text(), None);
}

#[test]
fn resume_upload_tolerates_unparsed_file() {
    let upload: ResumeUpload = serde_json::from_value(json!({
        "message": "Resume uploaded",
        "parsed_data": null,
        "file_path": "uploads/u1.pdf",
    }))
    .unwrap();

    assert!(upload.parsed_data.is_none());
    assert_eq!(upload.file_path, "uploads/u1.pdf");
}
