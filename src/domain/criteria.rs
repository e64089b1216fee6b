//! Search filter values.
//!
//! A [`SearchCriteria`] is rebuilt from the filter widgets on every filter
//! event and has no identity of its own. The publication-type and sorting
//! values mirror the option values the server accepts.

use crate::domain::error::{ExplorerError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire value of the "no publication-type restriction" sentinel.
pub const ANY_PUBLICATION_TYPE: &str = "any";

/// Publication types known to the server.
///
/// Each variant has a wire value (used in filter requests and the create form)
/// and a display label (used on result-card badges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationType {
    None,
    AnnotationCollection,
    Book,
    BookSection,
    ConferencePaper,
    DataManagementPlan,
    JournalArticle,
    Patent,
    Preprint,
    ProjectDeliverable,
    ProjectMilestone,
    Proposal,
    Report,
    SoftwareDocumentation,
    TaxonomicTreatment,
    TechnicalNote,
    Thesis,
    WorkingPaper,
    Other,
}

impl PublicationType {
    /// Every publication type, in the order the filter widget lists them.
    pub const ALL: [Self; 19] = [
        Self::None,
        Self::AnnotationCollection,
        Self::Book,
        Self::BookSection,
        Self::ConferencePaper,
        Self::DataManagementPlan,
        Self::JournalArticle,
        Self::Patent,
        Self::Preprint,
        Self::ProjectDeliverable,
        Self::ProjectMilestone,
        Self::Proposal,
        Self::Report,
        Self::SoftwareDocumentation,
        Self::TaxonomicTreatment,
        Self::TechnicalNote,
        Self::Thesis,
        Self::WorkingPaper,
        Self::Other,
    ];

    /// Value sent to the server.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AnnotationCollection => "annotationcollection",
            Self::Book => "book",
            Self::BookSection => "section",
            Self::ConferencePaper => "conferencepaper",
            Self::DataManagementPlan => "datamanagementplan",
            Self::JournalArticle => "article",
            Self::Patent => "patent",
            Self::Preprint => "preprint",
            Self::ProjectDeliverable => "deliverable",
            Self::ProjectMilestone => "milestone",
            Self::Proposal => "proposal",
            Self::Report => "report",
            Self::SoftwareDocumentation => "softwaredocumentation",
            Self::TaxonomicTreatment => "taxonomictreatment",
            Self::TechnicalNote => "technicalnote",
            Self::Thesis => "thesis",
            Self::WorkingPaper => "workingpaper",
            Self::Other => "other",
        }
    }

    /// Human-readable label, as the server prints it in search results.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::AnnotationCollection => "Annotation Collection",
            Self::Book => "Book",
            Self::BookSection => "Book Section",
            Self::ConferencePaper => "Conference Paper",
            Self::DataManagementPlan => "Data Management Plan",
            Self::JournalArticle => "Journal Article",
            Self::Patent => "Patent",
            Self::Preprint => "Preprint",
            Self::ProjectDeliverable => "Project Deliverable",
            Self::ProjectMilestone => "Project Milestone",
            Self::Proposal => "Proposal",
            Self::Report => "Report",
            Self::SoftwareDocumentation => "Software Documentation",
            Self::TaxonomicTreatment => "Taxonomic Treatment",
            Self::TechnicalNote => "Technical Note",
            Self::Thesis => "Thesis",
            Self::WorkingPaper => "Working Paper",
            Self::Other => "Other",
        }
    }

    /// Looks up a publication type by its display label (exact match after trimming).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|pt| pt.label() == label)
    }
}

impl FromStr for PublicationType {
    type Err = ExplorerError;

    /// Accepts the wire value (`article`) or the display label (`Journal Article`).
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|pt| pt.value() == value)
            .or_else(|| Self::from_label(value))
            .ok_or_else(|| ExplorerError::InvalidInput(format!("unknown publication type '{value}'")))
    }
}

/// Publication-type filter: the `any` sentinel or one concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PublicationTypeFilter {
    /// No restriction (the widget's default option).
    #[default]
    Any,
    /// Only datasets of the given type.
    Only(PublicationType),
}

impl PublicationTypeFilter {
    /// Value sent to the server.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Any => ANY_PUBLICATION_TYPE,
            Self::Only(pt) => pt.value(),
        }
    }
}

impl FromStr for PublicationTypeFilter {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == ANY_PUBLICATION_TYPE {
            Ok(Self::Any)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl Serialize for PublicationTypeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sorting {
    /// Most recently created first (the widget's default option).
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
}

impl Sorting {
    /// Every sorting option, in widget order.
    pub const ALL: [Self; 2] = [Self::Newest, Self::Oldest];

    /// Value sent to the server.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Radio-button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
        }
    }
}

impl FromStr for Sorting {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(ExplorerError::InvalidInput(format!("unknown sorting '{other}'"))),
        }
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Current values of the three filter widgets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    /// Free-text query.
    pub query: String,
    /// Publication-type filter.
    pub publication_type: PublicationTypeFilter,
    /// Result ordering.
    pub sorting: Sorting,
}

impl SearchCriteria {
    /// Resets every widget to its default: empty query, `any`, `newest`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
