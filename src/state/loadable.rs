//! Request-tokened async slot for tab data.
//!
//! DESIGN
//! ======
//! Each fetch takes a token from the slot before it is sent. Only the
//! response carrying the newest token may settle the slot, so a slow
//! response from an earlier tab switch or search can never overwrite a
//! newer one.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

/// Identifies one issued request within a [`Loadable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What the panel should currently render.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct Loadable<T> {
    pub status: LoadStatus<T>,
    latest: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Idle,
            latest: 0,
        }
    }
}

impl<T> Loadable<T> {
    /// Mark the slot as loading and issue a token for the new request.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.status = LoadStatus::Loading;
        RequestToken(self.latest)
    }

    /// Settle the slot with a response. Returns `false` and leaves the slot
    /// untouched when `token` has been superseded.
    pub fn settle(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.status = match result {
            Ok(value) => LoadStatus::Loaded(value),
            Err(message) => LoadStatus::Failed(message),
        };
        true
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.status {
            LoadStatus::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Drop any loaded value and invalidate in-flight requests.
    pub fn clear(&mut self) {
        self.latest += 1;
        self.status = LoadStatus::Idle;
    }
}
