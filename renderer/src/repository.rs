//! Data access for accounts, landing pages and sections.
//!
//! Everything that reads or writes stored records goes through
//! [`LandingPageRepository`]. Resolution and rendering never do: callers fetch a
//! [`PageSnapshot`] first and hand that to the renderer.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use thiserror::Error;

use crate::types::{AccountRecord, LandingPage, PageSnapshot, SectionRecord};
use crate::validate::{ValidationError, validate_section};

/// Failures surfaced by a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with that id (or slug)
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// `account`, `page` or `section`
        entity: &'static str,
        /// Id or slug that was looked up
        id: String,
    },

    /// Two sections of one page can't share a position
    #[error("landing page '{lp_id}' already has a section at order index {order_index}")]
    DuplicateOrderIndex {
        /// Page the section belongs to
        lp_id: String,
        /// Position already taken
        order_index: i32,
    },

    /// Section ids are unique across pages
    #[error("section id '{0}' is already in use")]
    DuplicateId(String),

    /// Content rejected at ingestion
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A writer panicked while holding the lock
    #[error("repository lock poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(_: PoisonError<T>) -> Self {
        RepositoryError::Poisoned
    }
}

fn not_found(entity: &'static str, id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity,
        id: id.to_string(),
    }
}

/// Storage interface for the page builder.
pub trait LandingPageRepository: Send + Sync {
    /// Account by id.
    fn account(&self, id: &str) -> Result<AccountRecord, RepositoryError>;

    /// Active page with this slug. Inactive pages are not found.
    fn page_by_slug(&self, slug: &str) -> Result<LandingPage, RepositoryError>;

    /// Page by id, active or not.
    fn page(&self, id: &str) -> Result<LandingPage, RepositoryError>;

    /// Every section of a page, active or not, in storage order.
    fn sections(&self, lp_id: &str) -> Result<Vec<SectionRecord>, RepositoryError>;

    /// Validate and store a new section.
    fn insert_section(&self, section: SectionRecord) -> Result<(), RepositoryError>;

    /// Validate and replace the content of an existing section.
    fn update_section_content(&self, id: &str, content: Value) -> Result<(), RepositoryError>;

    /// Show or hide a section without deleting it.
    fn set_section_active(&self, id: &str, active: bool) -> Result<(), RepositoryError>;

    /// Move a section to `new_order_index`, swapping with whichever section
    /// already sits there.
    fn move_section(&self, id: &str, new_order_index: i32) -> Result<(), RepositoryError>;

    /// Everything needed to render the page at `slug`.
    fn snapshot(&self, slug: &str) -> Result<PageSnapshot, RepositoryError> {
        let page = self.page_by_slug(slug)?;
        let account = self.account(&page.account_id)?;
        let sections = self.sections(&page.id)?;
        Ok(PageSnapshot {
            account,
            page,
            sections,
        })
    }
}

#[derive(Debug, Default)]
struct Store {
    accounts: BTreeMap<String, AccountRecord>,
    pages: BTreeMap<String, LandingPage>,
    sections: Vec<SectionRecord>,
}

impl Store {
    fn section_mut(&mut self, id: &str) -> Result<&mut SectionRecord, RepositoryError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("section", id))
    }
}

/// Process-local repository, mostly for tests and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

impl InMemoryRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository with one page and its records, as exported.
    ///
    /// Sections are loaded as-is, without validation, so drifted content can
    /// still be inspected and rendered. Sections pointing at another page are
    /// dropped with a warning.
    pub fn from_snapshot(snapshot: PageSnapshot) -> Self {
        let PageSnapshot {
            account,
            page,
            sections,
        } = snapshot;

        let mut store = Store::default();
        store.accounts.insert(account.id.clone(), account);
        store.sections = sections
            .into_iter()
            .filter(|section| {
                let owned = section.lp_id == page.id;
                if !owned {
                    tracing::warn!(
                        section = %section.id,
                        lp = %section.lp_id,
                        page = %page.id,
                        "section belongs to another page, dropped"
                    );
                }
                owned
            })
            .collect();
        store.pages.insert(page.id.clone(), page);

        Self {
            store: RwLock::new(store),
        }
    }

    /// Add or replace an account.
    pub fn insert_account(&self, account: AccountRecord) -> Result<(), RepositoryError> {
        self.write()?.accounts.insert(account.id.clone(), account);
        Ok(())
    }

    /// Add or replace a page.
    pub fn insert_page(&self, page: LandingPage) -> Result<(), RepositoryError> {
        self.write()?.pages.insert(page.id.clone(), page);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, RepositoryError> {
        Ok(self.store.read()?)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, RepositoryError> {
        Ok(self.store.write()?)
    }
}

impl LandingPageRepository for InMemoryRepository {
    fn account(&self, id: &str) -> Result<AccountRecord, RepositoryError> {
        self.read()?
            .accounts
            .get(id)
            .cloned()
            .ok_or_else(|| not_found("account", id))
    }

    fn page_by_slug(&self, slug: &str) -> Result<LandingPage, RepositoryError> {
        self.read()?
            .pages
            .values()
            .find(|p| p.active && p.slug == slug)
            .cloned()
            .ok_or_else(|| not_found("page", slug))
    }

    fn page(&self, id: &str) -> Result<LandingPage, RepositoryError> {
        self.read()?
            .pages
            .get(id)
            .cloned()
            .ok_or_else(|| not_found("page", id))
    }

    fn sections(&self, lp_id: &str) -> Result<Vec<SectionRecord>, RepositoryError> {
        let store = self.read()?;
        if !store.pages.contains_key(lp_id) {
            return Err(not_found("page", lp_id));
        }
        Ok(store
            .sections
            .iter()
            .filter(|s| s.lp_id == lp_id)
            .cloned()
            .collect())
    }

    fn insert_section(&self, section: SectionRecord) -> Result<(), RepositoryError> {
        validate_section(&section)?;

        let mut store = self.write()?;
        if !store.pages.contains_key(&section.lp_id) {
            return Err(not_found("page", &section.lp_id));
        }
        if store.sections.iter().any(|s| s.id == section.id) {
            return Err(RepositoryError::DuplicateId(section.id));
        }
        if store
            .sections
            .iter()
            .any(|s| s.lp_id == section.lp_id && s.order_index == section.order_index)
        {
            return Err(RepositoryError::DuplicateOrderIndex {
                lp_id: section.lp_id,
                order_index: section.order_index,
            });
        }

        tracing::debug!(section = %section.id, lp = %section.lp_id, "section inserted");
        store.sections.push(section);
        Ok(())
    }

    fn update_section_content(&self, id: &str, content: Value) -> Result<(), RepositoryError> {
        let mut store = self.write()?;
        let section = store.section_mut(id)?;

        let candidate = SectionRecord {
            content_json: content,
            ..section.clone()
        };
        validate_section(&candidate)?;

        *section = candidate;
        Ok(())
    }

    fn set_section_active(&self, id: &str, active: bool) -> Result<(), RepositoryError> {
        self.write()?.section_mut(id)?.active = active;
        Ok(())
    }

    fn move_section(&self, id: &str, new_order_index: i32) -> Result<(), RepositoryError> {
        let mut store = self.write()?;

        let (lp_id, old_index) = {
            let section = store.section_mut(id)?;
            (section.lp_id.clone(), section.order_index)
        };
        if old_index == new_order_index {
            return Ok(());
        }

        for section in store.sections.iter_mut().filter(|s| s.lp_id == lp_id) {
            if section.id == id {
                section.order_index = new_order_index;
            } else if section.order_index == new_order_index {
                section.order_index = old_index;
            }
        }
        Ok(())
    }
}
