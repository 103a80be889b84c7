//! Lead model and validation.
//!
//! A [`LeadSubmission`] is the raw JSON body posted by the website form. It
//! becomes a [`Lead`] only through [`Lead::try_from`], which enforces that
//! `name` and `phone` are present. A lead lives for a single request: it is
//! rendered into an email body, handed to the mailer, and dropped.

use serde::Deserialize;

use crate::error::LeadError;

/// Subject line of every lead notification.
pub const LEAD_SUBJECT: &str = "New CCTV / Biometric Service Lead";

/// Placeholder for an absent email or city.
pub const NOT_PROVIDED: &str = "Not provided";

/// Placeholder for an absent service type.
pub const NOT_SELECTED: &str = "Not selected";

/// Placeholder for an absent message.
pub const NO_MESSAGE: &str = "-";

/// Service categories offered by the website form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceType {
    #[default]
    CctvInstallation,
    CctvServiceAmc,
    BiometricAttendance,
    VideoDoorPhone,
    Others,
}

impl ServiceType {
    /// Every category, in the order the form lists them.
    pub const ALL: [Self; 5] = [
        Self::CctvInstallation,
        Self::CctvServiceAmc,
        Self::BiometricAttendance,
        Self::VideoDoorPhone,
        Self::Others,
    ];

    /// Human-readable label, also used as the form value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CctvInstallation => "CCTV Installation",
            Self::CctvServiceAmc => "CCTV Service / AMC",
            Self::BiometricAttendance => "Biometric Attendance",
            Self::VideoDoorPhone => "Video Door Phone",
            Self::Others => "Others",
        }
    }

    /// Look up a category by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw lead form body as posted by the browser.
///
/// Every field is optional at this layer so that a missing `name` produces
/// the same validation error as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub service_type: Option<String>,
    pub message: Option<String>,
}

/// A validated lead.
///
/// `name` and `phone` are trimmed and non-empty. Optional fields are `None`
/// when absent or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    name: String,
    phone: String,
    email: Option<String>,
    city: Option<String>,
    service_type: Option<String>,
    message: Option<String>,
}

impl TryFrom<LeadSubmission> for Lead {
    type Error = LeadError;

    fn try_from(submission: LeadSubmission) -> Result<Self, Self::Error> {
        let (name, phone) = match (non_blank(submission.name), non_blank(submission.phone)) {
            (Some(name), Some(phone)) => (name, phone),
            (name, phone) => {
                let fields = [("name", name.is_none()), ("phone", phone.is_none())]
                    .into_iter()
                    .filter_map(|(field, missing)| missing.then_some(field))
                    .collect();
                return Err(LeadError::MissingRequired { fields });
            }
        };

        Ok(Self {
            name,
            phone,
            email: non_blank(submission.email),
            city: non_blank(submission.city),
            service_type: non_blank(submission.service_type),
            // Messages keep their inner line breaks; only the ends are trimmed.
            message: non_blank(submission.message),
        })
    }
}

impl Lead {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn service_type(&self) -> Option<&str> {
        self.service_type.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Render the plaintext notification body sent to the operator inbox.
    ///
    /// Absent optional fields are replaced by [`NOT_PROVIDED`],
    /// [`NOT_SELECTED`], or [`NO_MESSAGE`] so that no line is ever blank.
    pub fn email_body(&self) -> String {
        format!(
            "New CCTV / Biometric Lead\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             City/Area: {city}\n\
             Service Type: {service}\n\
             \n\
             Message:\n\
             {message}",
            name = self.name,
            email = self.email().unwrap_or(NOT_PROVIDED),
            phone = self.phone,
            city = self.city().unwrap_or(NOT_PROVIDED),
            service = self.service_type().unwrap_or(NOT_SELECTED),
            message = self.message().unwrap_or(NO_MESSAGE),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn submission(name: &str, phone: &str) -> LeadSubmission {
        LeadSubmission {
            name: Some(name.to_owned()),
            phone: Some(phone.to_owned()),
            ..LeadSubmission::default()
        }
    }

    #[test]
    fn minimal_lead_uses_placeholders() {
        let lead = Lead::try_from(submission("Asha", "9999999999")).unwrap();
        let body = lead.email_body();

        assert!(body.starts_with("New CCTV / Biometric Lead\n\nName: Asha\n"));
        assert!(body.contains("Email: Not provided\n"));
        assert!(body.contains("Phone: 9999999999\n"));
        assert!(body.contains("City/Area: Not provided\n"));
        assert!(body.contains("Service Type: Not selected\n"));
        assert!(body.ends_with("Message:\n-"));
    }

    #[test]
    fn full_lead_renders_every_field() {
        let lead = Lead::try_from(LeadSubmission {
            name: Some("Ravi".to_owned()),
            email: Some("ravi@example.com".to_owned()),
            phone: Some("+91 90000 00000".to_owned()),
            city: Some("HSR Layout".to_owned()),
            service_type: Some("Video Door Phone".to_owned()),
            message: Some("Need 2 units.\nGround floor.".to_owned()),
        })
        .unwrap();

        assert_eq!(
            lead.email_body(),
            "New CCTV / Biometric Lead\n\n\
             Name: Ravi\n\
             Email: ravi@example.com\n\
             Phone: +91 90000 00000\n\
             City/Area: HSR Layout\n\
             Service Type: Video Door Phone\n\n\
             Message:\n\
             Need 2 units.\nGround floor."
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Lead::try_from(submission("", "9999999999")).unwrap_err();
        assert_eq!(
            err,
            LeadError::MissingRequired {
                fields: vec!["name"]
            }
        );
        assert_eq!(err.to_string(), "Name and phone are required");
    }

    #[test]
    fn whitespace_phone_is_rejected() {
        let err = Lead::try_from(submission("Asha", "   ")).unwrap_err();
        assert_eq!(
            err,
            LeadError::MissingRequired {
                fields: vec!["phone"]
            }
        );
    }

    #[test]
    fn absent_fields_report_both() {
        let err = Lead::try_from(LeadSubmission::default()).unwrap_err();
        assert_eq!(
            err,
            LeadError::MissingRequired {
                fields: vec!["name", "phone"]
            }
        );
    }

    #[test]
    fn blank_optionals_become_placeholders() {
        let lead = Lead::try_from(LeadSubmission {
            email: Some(String::new()),
            city: Some("  ".to_owned()),
            message: Some("\n".to_owned()),
            ..submission(" Asha ", " 9999999999 ")
        })
        .unwrap();

        assert_eq!(lead.name(), "Asha");
        assert_eq!(lead.phone(), "9999999999");
        assert_eq!(lead.email(), None);
        assert_eq!(lead.city(), None);
        assert_eq!(lead.message(), None);
    }

    #[test]
    fn submission_reads_camel_case() {
        let raw = r#"{"name":"A","phone":"1","serviceType":"Others","extra":true}"#;
        let parsed: LeadSubmission = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.service_type.as_deref(), Some("Others"));
    }

    #[test]
    fn service_type_labels_round_trip() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_label(service.label()), Some(service));
        }
        assert_eq!(ServiceType::default().label(), "CCTV Installation");
        assert_eq!(ServiceType::from_label("Drones"), None);
    }
}
