//! Notices
//!
//! What the notice area shows after an action. A failed evolution walk
//! produces none: the strip stays empty and the error goes to the console.

use pokedex::app::AppError;

/// What the user was doing when something failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Bulk load of the catalog
    Load,
    /// Favorite toggle of the named record
    Favorite { name: String },
    /// Filters, tabs and stage selection
    Browse,
    /// Evolution chain of an open panel
    EvolutionWalk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Favorite added or removed and saved
    Favorite { name: String, added: bool },
    /// Favorite flipped in this session but the write failed
    Unsaved { name: String, reason: String },
    /// Catalog did not load; stays up until a retry
    LoadFailed(String),
    /// Request rejected (unknown type, missing stage, ...)
    Rejected(String),
}

impl Notice {
    /// Notice for a failed action, if the user should see one
    pub fn for_failure(action: Action, err: &AppError) -> Option<Self> {
        match (action, err) {
            (Action::EvolutionWalk, _) => None,
            (Action::Load, AppError::Source(e)) => Some(Notice::LoadFailed(e.to_string())),
            (Action::Favorite { name }, AppError::Store(e)) => Some(Notice::Unsaved {
                name,
                reason: e.to_string(),
            }),
            (_, err) => Some(Notice::Rejected(err.to_string())),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notice::Favorite { name, added: true } => format!("{} added to favorites", name),
            Notice::Favorite { name, added: false } => {
                format!("{} removed from favorites", name)
            }
            Notice::Unsaved { name, reason } => {
                format!("{} changed for this visit only ({})", name, reason)
            }
            Notice::LoadFailed(reason) => format!("Could not load the catalog: {}", reason),
            Notice::Rejected(reason) => reason.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Favorite { .. })
    }

    /// Milliseconds on screen; `None` keeps it until replaced
    pub fn lifetime_ms(&self) -> Option<u32> {
        match self {
            Notice::Favorite { .. } => Some(2500),
            Notice::LoadFailed(_) => None,
            Notice::Unsaved { .. } | Notice::Rejected(_) => Some(5000),
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, Notice::LoadFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex::catalog::CatalogError;
    use pokedex::favorites::StoreError;
    use pokedex::source::SourceError;

    #[test]
    fn test_walk_failure_is_silent() {
        let err = AppError::from(SourceError::Network("timeout".into()));
        assert_eq!(Notice::for_failure(Action::EvolutionWalk, &err), None);
    }

    #[test]
    fn test_unsaved_favorite_names_the_record() {
        let err = AppError::from(StoreError::Unavailable("quota".into()));
        let notice = Notice::for_failure(
            Action::Favorite {
                name: "pikachu".into(),
            },
            &err,
        )
        .unwrap();

        assert!(notice.is_error());
        assert_eq!(
            notice.text(),
            "pikachu changed for this visit only (Store unavailable: quota)"
        );
    }

    #[test]
    fn test_load_failure_stays_until_retry() {
        let err = AppError::from(SourceError::Network("offline".into()));
        let notice = Notice::for_failure(Action::Load, &err).unwrap();

        assert!(notice.can_retry());
        assert_eq!(notice.lifetime_ms(), None);
        assert_eq!(
            notice.text(),
            "Could not load the catalog: Network failure: offline"
        );
    }

    #[test]
    fn test_rejected_filter_uses_error_text() {
        let err = AppError::from(CatalogError::UnknownType("shadow".into()));
        let notice = Notice::for_failure(Action::Browse, &err).unwrap();
        assert_eq!(notice, Notice::Rejected("Unknown type: shadow".into()));
        assert!(!notice.can_retry());
    }

    #[test]
    fn test_favorite_notice_is_short_lived() {
        let notice = Notice::Favorite {
            name: "eevee".into(),
            added: false,
        };
        assert!(!notice.is_error());
        assert_eq!(notice.text(), "eevee removed from favorites");
        assert_eq!(notice.lifetime_ms(), Some(2500));
    }
}
