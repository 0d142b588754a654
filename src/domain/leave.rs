use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::errors::DomainError;
use super::resource::Resource;
use super::validation::{not_blank, person_name};

/// Manager decision on a leave request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Approval {
    #[default]
    Pending,
    Yes,
    No,
}

impl Approval {
    pub const ALL: [Approval; 3] = [Approval::Pending, Approval::Yes, Approval::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            Approval::Pending => "Pending",
            Approval::Yes => "Yes",
            Approval::No => "No",
        }
    }
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Approval {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Approval::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "approval must be one of Pending, Yes, No (got '{s}')"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "leave_period"))]
pub struct Leave {
    #[validate(custom(function = "not_blank"))]
    pub employee_id: String,
    #[validate(custom(function = "person_name"))]
    pub employee_name: String,
    #[validate(custom(function = "not_blank"))]
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(custom(function = "not_blank"))]
    pub reason: String,
    #[serde(default)]
    pub approval: Approval,
}

fn leave_period(leave: &Leave) -> Result<(), ValidationError> {
    if leave.end_date < leave.start_date {
        return Err(ValidationError::new("period").with_message("endDate precedes startDate".into()));
    }
    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeavePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "person_name"))]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub leave_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "not_blank"))]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval: Option<Approval>,
}

impl Resource for Leave {
    const COLLECTION: &'static str = "leaves";
    const NAME: &'static str = "Leave";
    type Patch = LeavePatch;
}

/// Body of the approval endpoint. The value is checked against [`Approval`]
/// by hand so the error message can list the accepted values.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApprovalUpdate {
    pub approval: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave() -> Leave {
        Leave {
            employee_id: "EMP-7".to_string(),
            employee_name: "Kasun Silva".to_string(),
            leave_type: "Annual".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            reason: "Family trip".to_string(),
            approval: Approval::Pending,
        }
    }

    #[test]
    fn approval_parses_declared_values_only() {
        assert_eq!("Yes".parse::<Approval>().unwrap(), Approval::Yes);
        assert_eq!("Pending".parse::<Approval>().unwrap(), Approval::Pending);
        let err = "Maybe".parse::<Approval>().unwrap_err();
        assert!(err.to_string().contains("Pending, Yes, No"));
        assert!("yes".parse::<Approval>().is_err());
    }

    #[test]
    fn approval_defaults_to_pending_when_omitted() {
        let parsed: Leave = serde_json::from_value(serde_json::json!({
            "employeeId": "EMP-7",
            "employeeName": "Kasun Silva",
            "leaveType": "Sick",
            "startDate": "2026-03-02",
            "endDate": "2026-03-02",
            "reason": "Flu"
        }))
        .unwrap();
        assert_eq!(parsed.approval, Approval::Pending);
    }

    #[test]
    fn end_before_start_is_invalid() {
        let mut l = leave();
        assert!(l.validate().is_ok());
        l.end_date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(l.validate().is_err());
    }
}
