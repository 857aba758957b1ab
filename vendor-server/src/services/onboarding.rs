//! Onboarding Service - three-step kitchen setup wizard

use super::profile::ProfileService;
use crate::utils::validation::{MAX_ADDRESS_LEN, MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use shared::models::{
    CUISINE_OPTIONS, OnboardingDraft, OnboardingStep, OnboardingSubmitted, OnboardingUpdate,
    validate_hours,
};
use std::sync::Arc;

/// Dashboard route after onboarding
pub const NEXT_AFTER_SUBMIT: &str = "/kyc";

#[derive(Clone)]
pub struct OnboardingService {
    draft: Arc<RwLock<OnboardingDraft>>,
    profile: ProfileService,
}

impl std::fmt::Debug for OnboardingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingService")
            .field("step", &self.draft.read().step)
            .finish()
    }
}

fn already_submitted() -> AppError {
    AppError::new(ErrorCode::OnboardingAlreadySubmitted)
}

/// Check the fields collected by `step`
fn validate_step(draft: &OnboardingDraft, step: OnboardingStep) -> AppResult<()> {
    let result = match step {
        OnboardingStep::Basic => {
            validate_required_text(&draft.kitchen_name, "kitchen_name", MAX_NAME_LEN).and_then(|_| {
                if draft.cuisine_type.trim().is_empty() {
                    Err(AppError::required_field("cuisine_type"))
                } else if !CUISINE_OPTIONS.contains(&draft.cuisine_type.as_str()) {
                    Err(AppError::validation(format!(
                        "Unknown cuisine type: {}",
                        draft.cuisine_type
                    ))
                    .with_detail("field", "cuisine_type"))
                } else {
                    Ok(())
                }
            })
        }
        OnboardingStep::Address => validate_required_text(&draft.address, "address", MAX_ADDRESS_LEN),
        OnboardingStep::Hours => validate_hours(&draft.business_hours),
    };

    result.map_err(|e| {
        if e.code == ErrorCode::InvalidBusinessHours {
            e
        } else {
            AppError::with_message(ErrorCode::OnboardingStepIncomplete, e.message.clone())
                .with_detail("step", step.number())
                .with_detail("cause", e.code.code())
        }
    })
}

impl OnboardingService {
    pub fn new(profile: ProfileService) -> Self {
        Self {
            draft: Arc::new(RwLock::new(OnboardingDraft::default())),
            profile,
        }
    }

    pub fn get(&self) -> OnboardingDraft {
        self.draft.read().clone()
    }

    /// Merge form fields into the draft; no step checks here
    pub fn update(&self, update: OnboardingUpdate) -> AppResult<OnboardingDraft> {
        let mut draft = self.draft.write();
        if draft.submitted {
            return Err(already_submitted());
        }

        if let Some(kitchen_name) = update.kitchen_name {
            draft.kitchen_name = kitchen_name;
        }
        if let Some(cuisine_type) = update.cuisine_type {
            draft.cuisine_type = cuisine_type;
        }
        if let Some(address) = update.address {
            draft.address = address;
        }
        if let Some(days) = update.business_hours {
            for (day, patch) in days {
                if let Some(hours) = draft.business_hours.get_mut(&day) {
                    patch.apply(hours);
                }
            }
        }
        Ok(draft.clone())
    }

    /// Validate the current step and advance
    pub fn next(&self) -> AppResult<OnboardingDraft> {
        let mut draft = self.draft.write();
        if draft.submitted {
            return Err(already_submitted());
        }
        let next = draft
            .step
            .next()
            .ok_or_else(|| AppError::invalid_request("Already at the last step; submit instead"))?;
        validate_step(&draft, draft.step)?;
        draft.step = next;
        Ok(draft.clone())
    }

    pub fn back(&self) -> AppResult<OnboardingDraft> {
        let mut draft = self.draft.write();
        if draft.submitted {
            return Err(already_submitted());
        }
        draft.step = draft
            .step
            .prev()
            .ok_or_else(|| AppError::invalid_request("Already at the first step"))?;
        Ok(draft.clone())
    }

    /// Finish the wizard and write the answers into the vendor profile
    pub fn submit(&self) -> AppResult<OnboardingSubmitted> {
        let mut draft = self.draft.write();
        if draft.submitted {
            return Err(already_submitted());
        }
        if draft.step != OnboardingStep::Hours {
            return Err(AppError::new(ErrorCode::OnboardingNotAtFinalStep)
                .with_detail("step", draft.step.number()));
        }
        for step in [OnboardingStep::Basic, OnboardingStep::Address, OnboardingStep::Hours] {
            validate_step(&draft, step)?;
        }

        self.profile.apply_onboarding(
            draft.kitchen_name.trim(),
            &draft.cuisine_type,
            draft.address.trim(),
            &draft.business_hours,
        );
        draft.submitted = true;

        tracing::info!(kitchen_name = %draft.kitchen_name, cuisine = %draft.cuisine_type, "Onboarding submitted");
        Ok(OnboardingSubmitted {
            draft: draft.clone(),
            next: NEXT_AFTER_SUBMIT.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use shared::models::{DayHoursPatch, Weekday};
    use std::collections::BTreeMap;

    fn service() -> (ProfileService, OnboardingService) {
        let profile = ProfileService::new(seed::vendor_profile());
        let onboarding = OnboardingService::new(profile.clone());
        (profile, onboarding)
    }

    fn fill_basic(onboarding: &OnboardingService) {
        onboarding
            .update(OnboardingUpdate {
                kitchen_name: Some("Meera's Tiffin".into()),
                cuisine_type: Some("South Indian".into()),
                ..Default::default()
            })
            .unwrap();
    }

    #[test]
    fn test_basic_step_requires_fields() {
        let (_, onboarding) = service();
        let err = onboarding.next().unwrap_err();
        assert_eq!(err.code, ErrorCode::OnboardingStepIncomplete);
        assert_eq!(onboarding.get().step, OnboardingStep::Basic);

        onboarding
            .update(OnboardingUpdate {
                kitchen_name: Some("Meera's Tiffin".into()),
                cuisine_type: Some("Martian".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            onboarding.next().unwrap_err().code,
            ErrorCode::OnboardingStepIncomplete
        );

        fill_basic(&onboarding);
        assert_eq!(onboarding.next().unwrap().step, OnboardingStep::Address);
    }

    #[test]
    fn test_back_and_bounds() {
        let (_, onboarding) = service();
        assert_eq!(
            onboarding.back().unwrap_err().code,
            ErrorCode::InvalidRequest
        );

        fill_basic(&onboarding);
        onboarding.next().unwrap();
        assert_eq!(onboarding.back().unwrap().step, OnboardingStep::Basic);
        // answers survive going back
        assert_eq!(onboarding.get().kitchen_name, "Meera's Tiffin");
    }

    #[test]
    fn test_submit_only_at_final_step() {
        let (_, onboarding) = service();
        fill_basic(&onboarding);
        assert_eq!(
            onboarding.submit().unwrap_err().code,
            ErrorCode::OnboardingNotAtFinalStep
        );
    }

    #[test]
    fn test_submit_writes_profile() {
        let (profile, onboarding) = service();
        fill_basic(&onboarding);
        onboarding.next().unwrap();
        onboarding
            .update(OnboardingUpdate {
                address: Some("12 MG Road, Bengaluru".into()),
                ..Default::default()
            })
            .unwrap();
        onboarding.next().unwrap();
        assert_eq!(
            onboarding.next().unwrap_err().code,
            ErrorCode::InvalidRequest
        );

        let mut days = BTreeMap::new();
        days.insert(
            Weekday::Sunday,
            DayHoursPatch {
                open: Some(true),
                start_time: Some("10:00".into()),
                end_time: Some("14:00".into()),
            },
        );
        onboarding
            .update(OnboardingUpdate {
                business_hours: Some(days),
                ..Default::default()
            })
            .unwrap();

        let submitted = onboarding.submit().unwrap();
        assert_eq!(submitted.next, "/kyc");
        assert!(submitted.draft.submitted);

        let saved = profile.get();
        assert_eq!(saved.kitchen_name, "Meera's Tiffin");
        assert_eq!(saved.cuisine_type, "South Indian");
        assert_eq!(saved.address, "12 MG Road, Bengaluru");
        assert!(saved.business_hours[&Weekday::Sunday].open);
        assert_eq!(saved.business_hours[&Weekday::Monday].end_time, "18:00");

        assert_eq!(
            onboarding.submit().unwrap_err().code,
            ErrorCode::OnboardingAlreadySubmitted
        );
    }

    #[test]
    fn test_invalid_hours_block_submit() {
        let (_, onboarding) = service();
        fill_basic(&onboarding);
        onboarding.next().unwrap();
        onboarding
            .update(OnboardingUpdate {
                address: Some("12 MG Road".into()),
                ..Default::default()
            })
            .unwrap();
        onboarding.next().unwrap();

        let mut days = BTreeMap::new();
        days.insert(
            Weekday::Monday,
            DayHoursPatch {
                end_time: Some("08:00".into()),
                ..Default::default()
            },
        );
        onboarding
            .update(OnboardingUpdate {
                business_hours: Some(days),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            onboarding.submit().unwrap_err().code,
            ErrorCode::InvalidBusinessHours
        );
        assert!(!onboarding.get().submitted);
    }
}
