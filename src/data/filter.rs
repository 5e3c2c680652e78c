use thiserror::Error;

use super::model::CourseDataset;

// ---------------------------------------------------------------------------
// Search criteria
// ---------------------------------------------------------------------------

/// Raw search inputs as typed by the user.  Blank fields mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub district: String,
    pub pin_code: String,
    pub address: String,
}

/// Rejected criteria.  The messages are user-facing, in English and
/// Kannada, and are raised before the collection is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Please enter a valid 6-digit pincode.\nದಯವಿಟ್ಟು ಮಾನ್ಯ 6 ಸಂಖ್ಯೆ ಪಿನ್ ಕೋಡ್ ನಮೂದಿಸಿ.")]
    InvalidPinCode,
    #[error("Please select or enter at least one search criteria.\nದಯವಿಟ್ಟು ಕನಿಷ್ಠ ಒಂದು ಮಾನದಂಡವನ್ನು ಆಯ್ಕೆಮಾಡಿ ಅಥವಾ ನಮೂದಿಸಿ.")]
    NoCriteria,
}

/// Criteria that passed validation, ready to filter with.  The pin code is
/// already an integer and the address already lowercased, so the filter
/// itself does no coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCriteria {
    pub district: Option<String>,
    pub pin_code: Option<u32>,
    pub address: Option<String>,
}

impl Criteria {
    /// Validate the raw inputs: a present pin code must be exactly 6 ASCII
    /// digits, and at least one field must be present.
    pub fn validate(&self) -> Result<ValidCriteria, CriteriaError> {
        let district = non_blank(&self.district);
        let address = non_blank(&self.address);

        let pin_code = match non_blank(&self.pin_code) {
            Some(raw) => {
                if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_digit()) {
                    return Err(CriteriaError::InvalidPinCode);
                }
                // 6 ASCII digits always fit in u32
                Some(raw.parse::<u32>().map_err(|_| CriteriaError::InvalidPinCode)?)
            }
            None => None,
        };

        if district.is_none() && pin_code.is_none() && address.is_none() {
            return Err(CriteriaError::NoCriteria);
        }

        Ok(ValidCriteria {
            district,
            pin_code,
            address: address.map(|a| a.to_lowercase()),
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Filter: criteria union over the collection
// ---------------------------------------------------------------------------

/// Return indices of courses matching the criteria.
///
/// Each present criterion is evaluated independently against the full
/// collection and the matches are unioned in the fixed order district →
/// pin code → address.  A row matching several criteria is kept once, at
/// the position of its first match.  That union order is a contract, not
/// an accident.
///
/// District matches by exact string equality, pin code by integer
/// equality, address by case-insensitive substring containment.
pub fn filter_courses(dataset: &CourseDataset, criteria: &ValidCriteria) -> Vec<usize> {
    let mut rows: Vec<usize> = Vec::new();

    if let Some(district) = &criteria.district {
        for (i, c) in dataset.courses.iter().enumerate() {
            if c.district == *district {
                rows.push(i);
            }
        }
    }
    if let Some(pin) = criteria.pin_code {
        for (i, c) in dataset.courses.iter().enumerate() {
            if c.pin_code == pin && !rows.contains(&i) {
                rows.push(i);
            }
        }
    }
    if let Some(address) = &criteria.address {
        for (i, c) in dataset.courses.iter().enumerate() {
            if c.address.to_lowercase().contains(address.as_str()) && !rows.contains(&i) {
                rows.push(i);
            }
        }
    }

    rows
}
