//! Serde DTOs for the matcher backend's REST contract.
//!
//! DESIGN
//! ======
//! Backend-owned records carry `#[serde(default)]` on every field the
//! backend may omit, so a sparse document still decodes instead of failing
//! the whole page. Fields the client must not guess at stay `Option`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

fn default_experience_level() -> String {
    "entry".to_owned()
}

/// Successful payload of `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// Token scheme reported by the backend (always `"bearer"` today).
    #[serde(default)]
    pub token_type: String,
    /// Identifier of the authenticated user.
    pub user_id: String,
    /// Partial user record echoed back by the auth endpoint.
    pub user_data: AuthUser,
}

/// The sparse user record embedded in an auth response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl AuthSession {
    /// Combine the embedded record with its id into a full profile.
    ///
    /// Auth responses only carry a handful of profile fields; the rest take
    /// their defaults until the next profile fetch supersedes this copy.
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id: self.user_id,
            email: self.user_data.email,
            full_name: self.user_data.full_name,
            skills: self.user_data.skills,
            ..UserProfile::default()
        }
    }
}

/// A user profile as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    /// Skills in backend order; rendering preserves this order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// One of `entry`, `mid`, `senior`.
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    /// Backend-side path of the last uploaded resume, if any.
    #[serde(default)]
    pub resume_url: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            email: String::new(),
            full_name: String::new(),
            skills: Vec::new(),
            experience_level: default_experience_level(),
            interests: String::new(),
            career_goals: String::new(),
            phone: String::new(),
            location: String::new(),
            resume_url: String::new(),
        }
    }
}

/// Envelope around a profile fetch (`GET /api/users/{id}`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserEnvelope {
    pub user: UserProfile,
}

/// Partial profile update for `PUT /api/users/{id}`.
///
/// Only populated fields are serialized, so an update touches exactly the
/// fields the user edited.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Acknowledgement of a profile update.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: String,
}

/// Generic `{message}` reply (forgot-password and similar endpoints).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessageReply {
    #[serde(default)]
    pub message: String,
}

/// Result of a resume upload, including whatever the parser extracted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResumeUpload {
    #[serde(default)]
    pub message: String,
    /// Absent when the backend saved the file but failed to parse it.
    pub parsed_data: Option<ParsedResume>,
    #[serde(default)]
    pub file_path: String,
}

/// Fields the backend's resume parser extracts from a PDF.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Which listing collections a match request ranks against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    #[default]
    Jobs,
    Internships,
    All,
}

impl MatchKind {
    /// Tab label used by the matches views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Jobs => "Jobs",
            Self::Internships => "Internships",
            Self::All => "All",
        }
    }
}

/// Request body of `POST /api/matching/matches`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchRequest {
    pub user_id: String,
    pub match_type: MatchKind,
    pub limit: u32,
}

/// One backend-ranked pairing of the user against a listing.
///
/// The wire payload keys the listing under `job` or `internship` depending
/// on the request; both are modeled and [`Match::listing`] exposes whichever
/// is present.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Match {
    pub job: Option<Job>,
    pub internship: Option<Internship>,
    /// Skill-overlap score in `0..=100`.
    pub match_score: f64,
    /// Backend-estimated rejection probability in `0..=100`.
    pub rejection_probability: f64,
    /// `low`, `medium`, or `high`.
    #[serde(default)]
    pub rejection_risk: String,
    #[serde(default)]
    pub skill_match: SkillMatch,
    /// Human-readable reasoning line.
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub recommended_action: String,
}

/// Matched/missing skill breakdown for one match.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SkillMatch {
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

/// Typed view over the dynamic `job`/`internship` key of a match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MatchListing<'a> {
    Job(&'a Job),
    Internship(&'a Internship),
}

impl Match {
    /// The listing this match ranks, if the payload carried one.
    pub fn listing(&self) -> Option<MatchListing<'_>> {
        if let Some(job) = &self.job {
            return Some(MatchListing::Job(job));
        }
        self.internship.as_ref().map(MatchListing::Internship)
    }
}

impl MatchListing<'_> {
    pub fn title(&self) -> &str {
        match self {
            Self::Job(job) => &job.title,
            Self::Internship(internship) => &internship.title,
        }
    }

    pub fn company(&self) -> &str {
        match self {
            Self::Job(job) => &job.company,
            Self::Internship(internship) => &internship.company,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Self::Job(job) => &job.location,
            Self::Internship(internship) => &internship.location,
        }
    }

    pub fn external_url(&self) -> &str {
        match self {
            Self::Job(job) => &job.external_url,
            Self::Internship(internship) => &internship.external_url,
        }
    }
}

/// Response of `POST /api/matching/matches`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub total_matches: u32,
    /// Advisory note, e.g. "add skills to your profile for better matches".
    pub message: Option<String>,
}

/// A job posting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: String,
    #[serde(default)]
    pub location: String,
    /// `remote`, `hybrid`, or `onsite`.
    #[serde(default)]
    pub job_type: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub external_url: String,
    /// Which scraper produced this posting (`adzuna`, `jsearch`, `manual`).
    #[serde(default)]
    pub source: String,
}

/// An internship posting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub duration_months: u32,
    pub stipend_min: Option<i64>,
    pub stipend_max: Option<i64>,
    #[serde(default)]
    pub location: String,
    /// `remote`, `hybrid`, or `onsite`.
    #[serde(default)]
    pub internship_type: String,
    #[serde(default)]
    pub education_required: String,
    #[serde(default)]
    pub year_of_study: String,
    #[serde(default)]
    pub external_url: String,
}

/// Response of `GET /api/jobs/list`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct JobsList {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Response of `GET /api/internships/list`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InternshipsList {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub internships: Vec<Internship>,
}

/// Platform-wide aggregates from `GET /api/statistics/overview`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct OverviewStats {
    #[serde(default)]
    pub total_jobs: u32,
    #[serde(default)]
    pub total_internships: u32,
    #[serde(default)]
    pub job_sources: JobSources,
}

/// Job counts per scraping source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct JobSources {
    #[serde(default)]
    pub adzuna: u32,
    #[serde(default)]
    pub jsearch: u32,
    #[serde(default)]
    pub manual: u32,
}

/// Per-user aggregates from `GET /api/statistics/user/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserStatistics {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub skills_count: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub total_applications: u32,
    #[serde(default)]
    pub accepted: u32,
    #[serde(default)]
    pub rejected: u32,
    #[serde(default)]
    pub pending: u32,
    /// Accepted share of all applications, in percent.
    #[serde(default)]
    pub success_rate: f64,
}

/// One prior turn sent along with a chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// `user` or `assistant`.
    pub role: String,
    pub content: String,
}

/// Request body of `POST /api/chat/message`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    /// Prior turns, oldest first, excluding the message being sent.
    pub messages: Vec<ChatTurn>,
}

/// Reply of `POST /api/chat/message`.
///
/// Older backend revisions answered under `message` instead of `response`;
/// [`ChatReply::text`] accepts either.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: Option<String>,
    pub message: Option<String>,
}

impl ChatReply {
    /// The assistant text, whichever field carried it.
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref().or(self.message.as_deref())
    }
}
