use crate::tag::Type3Tag;
use crate::types::{Idm, Pmm, SystemCode};
use crate::{Error, Result};

/// Fluent construction of a `Type3Tag` from polling results.
///
/// The system code defaults to the NDEF system code; IDm and PMm are
/// required.
#[derive(Debug, Default)]
pub struct Type3TagBuilder {
    idm: Option<Idm>,
    pmm: Option<Pmm>,
    system_code: Option<SystemCode>,
}

impl Type3TagBuilder {
    /// Builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IDm from the Polling answer.
    pub fn idm(mut self, idm: Idm) -> Self {
        self.idm = Some(idm);
        self
    }

    /// Set the PMm from the Polling answer.
    pub fn pmm(mut self, pmm: Pmm) -> Self {
        self.pmm = Some(pmm);
        self
    }

    /// Override the NDEF default.
    pub fn system_code(mut self, sc: SystemCode) -> Self {
        self.system_code = Some(sc);
        self
    }

    /// Build the tag; fails when IDm or PMm is missing.
    pub fn build(self) -> Result<Type3Tag> {
        let idm = self.idm.ok_or(Error::InvalidLength {
            expected: 8,
            actual: 0,
        })?;
        let pmm = self.pmm.ok_or(Error::InvalidLength {
            expected: 8,
            actual: 0,
        })?;
        let system_code = self.system_code.unwrap_or(SystemCode::NDEF);

        Ok(Type3Tag::new(idm, pmm, system_code))
    }
}
