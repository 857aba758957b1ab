//! Profile Service - vendor profile with copy-then-replace editing

use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_text_len,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use shared::models::{BusinessHours, DayHours, DayHoursPatch, VendorProfile, Weekday};
use std::sync::Arc;

#[derive(Debug)]
struct ProfileState {
    profile: VendorProfile,
    /// Working copy while editing
    draft: Option<VendorProfile>,
}

#[derive(Clone)]
pub struct ProfileService {
    state: Arc<RwLock<ProfileState>>,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService")
            .field("editing", &self.state.read().draft.is_some())
            .finish()
    }
}

fn not_editing() -> AppError {
    AppError::new(ErrorCode::ProfileNotEditing)
}

fn check_lengths(profile: &VendorProfile) -> AppResult<()> {
    let bank = &profile.bank_details;
    let limits = [
        ("name", &profile.name, MAX_NAME_LEN),
        ("email", &profile.email, MAX_EMAIL_LEN),
        ("phone", &profile.phone, MAX_SHORT_TEXT_LEN),
        ("kitchen_name", &profile.kitchen_name, MAX_NAME_LEN),
        ("cuisine_type", &profile.cuisine_type, MAX_NAME_LEN),
        ("address", &profile.address, MAX_ADDRESS_LEN),
        ("fssai_number", &profile.fssai_number, MAX_SHORT_TEXT_LEN),
        ("bank_details.account_number", &bank.account_number, MAX_SHORT_TEXT_LEN),
        ("bank_details.ifsc_code", &bank.ifsc_code, MAX_SHORT_TEXT_LEN),
        ("bank_details.account_name", &bank.account_name, MAX_NAME_LEN),
        ("bank_details.bank_name", &bank.bank_name, MAX_NAME_LEN),
    ];
    for (field, value, max_len) in limits {
        validate_text_len(value, field, max_len)?;
    }
    Ok(())
}

impl ProfileService {
    pub fn new(profile: VendorProfile) -> Self {
        Self {
            state: Arc::new(RwLock::new(ProfileState {
                profile,
                draft: None,
            })),
        }
    }

    pub fn get(&self) -> VendorProfile {
        self.state.read().profile.clone()
    }

    pub fn draft(&self) -> Option<VendorProfile> {
        self.state.read().draft.clone()
    }

    /// Start editing from a fresh copy of the profile
    pub fn begin_edit(&self) -> VendorProfile {
        let mut state = self.state.write();
        let draft = state.profile.clone();
        state.draft = Some(draft.clone());
        draft
    }

    pub fn edit_field(&self, field: &str, value: String) -> AppResult<VendorProfile> {
        let mut state = self.state.write();
        let draft = state.draft.as_mut().ok_or_else(not_editing)?;
        draft.set_field(field, value)?;
        Ok(draft.clone())
    }

    pub fn edit_hours(&self, day: Weekday, patch: DayHoursPatch) -> AppResult<VendorProfile> {
        let mut state = self.state.write();
        let draft = state.draft.as_mut().ok_or_else(not_editing)?;
        let hours = draft
            .business_hours
            .entry(day)
            .or_insert_with(|| DayHours::closed("09:00", "21:00"));
        patch.apply(hours);
        Ok(draft.clone())
    }

    /// Discard the draft; the profile is untouched
    pub fn cancel_edit(&self) -> AppResult<VendorProfile> {
        let mut state = self.state.write();
        state.draft.take().ok_or_else(not_editing)?;
        Ok(state.profile.clone())
    }

    /// Validate the draft and make it the profile
    pub fn save(&self) -> AppResult<VendorProfile> {
        let mut state = self.state.write();
        let draft = state.draft.as_ref().ok_or_else(not_editing)?;
        // A failed check keeps the draft for correction
        check_lengths(draft)?;
        draft.validate()?;

        if let Some(draft) = state.draft.take() {
            state.profile = draft;
        }
        tracing::info!(kitchen_name = %state.profile.kitchen_name, "Profile saved");
        Ok(state.profile.clone())
    }

    /// Write the onboarding answers into the profile
    pub fn apply_onboarding(
        &self,
        kitchen_name: &str,
        cuisine_type: &str,
        address: &str,
        business_hours: &BusinessHours,
    ) -> VendorProfile {
        let mut state = self.state.write();
        let profile = &mut state.profile;
        profile.kitchen_name = kitchen_name.to_string();
        profile.cuisine_type = cuisine_type.to_string();
        profile.address = address.to_string();
        profile.business_hours = business_hours.clone();
        profile.clone()
    }
}
