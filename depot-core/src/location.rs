//! Named depot locations read from the input table.

use thiserror::Error;

/// A depot with a human-readable label and a free-text street address.
///
/// The address is passed verbatim to the routing provider; geocoding is the
/// provider's concern.
///
/// # Examples
///
/// ```
/// use depot_core::Location;
///
/// # fn main() -> Result<(), depot_core::LocationError> {
/// let depot = Location::new("North", "1 Main St, Springfield")?;
/// assert_eq!(depot.designation(), "North");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    designation: String,
    address: String,
}

/// Errors returned by [`Location::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The designation was empty or whitespace.
    #[error("location designation must not be blank")]
    MissingDesignation,
    /// The address was empty or whitespace.
    #[error("address of location {designation:?} must not be blank")]
    MissingAddress {
        /// Designation of the offending location.
        designation: String,
    },
}

impl Location {
    /// Validates and constructs a [`Location`].
    ///
    /// Both fields are stored as given; only blankness is checked.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] when either field is empty or whitespace.
    pub fn new(
        designation: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, LocationError> {
        let location = Self {
            designation: designation.into(),
            address: address.into(),
        };
        if location.designation.trim().is_empty() {
            return Err(LocationError::MissingDesignation);
        }
        if location.address.trim().is_empty() {
            return Err(LocationError::MissingAddress {
                designation: location.designation,
            });
        }
        Ok(location)
    }

    /// Unique label of the depot.
    #[must_use]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Street address sent to the routing provider.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}
