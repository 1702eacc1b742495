//! Search session state: phase machine, current results, pagination window,
//! and the selection/lead store.
//!
//! The session owns all mutable search state through `&mut self` methods, so
//! each caller gets its outcome from the returned `Result` rather than from
//! shared loading/error flags. Nothing here survives a logout.

use prospector_core::types::{Company, FilterCriteria};

use crate::client::ProspectorClient;
use crate::error::ProspectorError;
use crate::search::{fetch_page, PageState};
use crate::types::LeadReceipt;

/// Lifecycle of a search session. `Ready` and `Failed` both return to
/// `Loading` on the next submit, page change, or retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// The companies the user has marked, deduplicated by id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    companies: Vec<Company>,
}

impl SelectionSet {
    /// Adds a company. Idempotent by id: re-adding an already-selected
    /// company is a no-op and returns `false`.
    pub fn add(&mut self, company: Company) -> bool {
        if self.contains(&company.id) {
            return false;
        }
        self.companies.push(company);
        true
    }

    /// Removes by id; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.companies.len();
        self.companies.retain(|c| c.id != id);
        self.companies.len() != before
    }

    pub fn clear(&mut self) {
        self.companies.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.companies.iter().any(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Company] {
        &self.companies
    }
}

/// One user's search session.
#[derive(Debug)]
pub struct SearchSession {
    authenticated: bool,
    phase: SearchPhase,
    criteria: FilterCriteria,
    results: Vec<Company>,
    page: PageState,
    selection: SelectionSet,
}

impl SearchSession {
    #[must_use]
    pub fn new(take: usize) -> Self {
        Self {
            authenticated: false,
            phase: SearchPhase::Idle,
            criteria: FilterCriteria::default(),
            results: Vec::new(),
            page: PageState::new(take),
            selection: SelectionSet::default(),
        }
    }

    /// Validates the client credentials against the provider and records the
    /// outcome. Only a valid login unlocks [`SearchSession::search`].
    ///
    /// # Errors
    ///
    /// Any [`ProspectorError`] from the transport layer; the session stays
    /// unauthenticated on failure.
    pub async fn sign_in(&mut self, client: &ProspectorClient) -> Result<bool, ProspectorError> {
        let status = client.validate_login().await?;
        self.authenticated = status.valid;
        Ok(status.valid)
    }

    /// Submits new criteria: resets pagination and replaces the result list
    /// wholesale with the first page.
    ///
    /// # Errors
    ///
    /// [`ProspectorError::AuthenticationRequired`] before any network call
    /// when the session is not signed in; otherwise any transport error, in
    /// which case the session lands in [`SearchPhase::Failed`].
    pub async fn search(
        &mut self,
        client: &ProspectorClient,
        criteria: FilterCriteria,
    ) -> Result<&[Company], ProspectorError> {
        self.require_auth()?;
        self.phase = SearchPhase::Loading;
        self.page.reset();
        self.criteria = criteria;

        match fetch_page(client, &self.criteria, self.page.skip, self.page.take).await {
            Ok(page) => {
                self.results = page.companies;
                self.page.total_available = page.total_count;
                self.phase = SearchPhase::Ready;
                Ok(&self.results)
            }
            Err(e) => {
                self.phase = SearchPhase::Failed;
                Err(e)
            }
        }
    }

    /// Fetches the next page for the current criteria, replacing the result
    /// list. The skip offset only moves after a successful fetch, so a
    /// failed page can be retried in place.
    ///
    /// # Errors
    ///
    /// Same contract as [`SearchSession::search`].
    pub async fn next_page(
        &mut self,
        client: &ProspectorClient,
    ) -> Result<&[Company], ProspectorError> {
        self.require_auth()?;
        self.phase = SearchPhase::Loading;
        let next_skip = self.page.skip + self.page.take;

        match fetch_page(client, &self.criteria, next_skip, self.page.take).await {
            Ok(page) => {
                self.results = page.companies;
                self.page.advance();
                self.page.total_available = page.total_count;
                self.phase = SearchPhase::Ready;
                Ok(&self.results)
            }
            Err(e) => {
                self.phase = SearchPhase::Failed;
                Err(e)
            }
        }
    }

    /// Marks a company. No-op when already selected.
    pub fn select(&mut self, company: Company) -> bool {
        self.selection.add(company)
    }

    pub fn deselect(&mut self, id: &str) -> bool {
        self.selection.remove(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Submits the whole selection as one lead batch.
    ///
    /// An empty selection short-circuits with a zero receipt and no network
    /// call. The selection is kept on success; the provider does not model
    /// partial failure within the batch.
    ///
    /// # Errors
    ///
    /// [`ProspectorError::AuthenticationRequired`] when not signed in;
    /// otherwise any transport error.
    pub async fn submit_leads(
        &mut self,
        client: &ProspectorClient,
    ) -> Result<LeadReceipt, ProspectorError> {
        self.require_auth()?;
        if self.selection.is_empty() {
            return Ok(LeadReceipt {
                success: true,
                leads_created: 0,
                message: "no companies selected".to_string(),
            });
        }
        client.create_leads(self.selection.as_slice()).await
    }

    /// Session teardown: discards results, filters, pagination, and the
    /// selection unconditionally, and forces the phase back to `Idle`.
    pub fn logout(&mut self) {
        let take = self.page.take;
        self.authenticated = false;
        self.phase = SearchPhase::Idle;
        self.criteria = FilterCriteria::default();
        self.results.clear();
        self.page = PageState::new(take);
        self.selection.clear();
    }

    fn require_auth(&self) -> Result<(), ProspectorError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(ProspectorError::AuthenticationRequired)
        }
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn results(&self) -> &[Company] {
        &self.results
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn page(&self) -> PageState {
        self.page
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Test/bootstrap hook: marks the session authenticated without a
    /// round trip.
    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: &str, name: &str) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            organisation_number: id.to_string(),
            description: String::new(),
            employees: 0,
            turn_over: 0,
            legal_entity: String::new(),
            vat_number: String::new(),
            phone: String::new(),
            address: String::new(),
            post_code: String::new(),
            city: String::new(),
            branch: "Unknown".to_string(),
            status: "Active".to_string(),
            founded: "Unknown".to_string(),
        }
    }

    #[test]
    fn selection_add_is_idempotent_by_id() {
        let mut selection = SelectionSet::default();
        assert!(selection.add(company("556789-1234", "Acme AB")));
        assert!(!selection.add(company("556789-1234", "Acme AB renamed")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn selection_preserves_insertion_order() {
        let mut selection = SelectionSet::default();
        selection.add(company("2", "B"));
        selection.add(company("1", "A"));
        let names: Vec<_> = selection.as_slice().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn selection_remove_by_id() {
        let mut selection = SelectionSet::default();
        selection.add(company("1", "A"));
        assert!(selection.remove("1"));
        assert!(!selection.remove("1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn new_session_is_idle_and_unauthenticated() {
        let session = SearchSession::new(25);
        assert_eq!(session.phase(), SearchPhase::Idle);
        assert!(!session.is_authenticated());
        assert!(session.results().is_empty());
    }

    #[test]
    fn logout_discards_everything() {
        let mut session = SearchSession::new(25);
        session.set_authenticated(true);
        session.select(company("1", "A"));
        session.logout();

        assert_eq!(session.phase(), SearchPhase::Idle);
        assert!(!session.is_authenticated());
        assert!(session.selection().is_empty());
        assert!(session.results().is_empty());
        assert_eq!(session.page().skip, 0);
        assert_eq!(session.page().take, 25);
        assert_eq!(*session.criteria(), FilterCriteria::default());
    }
}
