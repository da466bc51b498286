//! Properties for the `ClubCreateComponent`.

use yew::prelude::*;

/// Configuration passed from a parent component to the club-creation form.
#[derive(Properties, PartialEq, Clone)]
pub struct ClubCreateProps {
    /// Invoked with the new club's identifier after a successful submission,
    /// so the hosting page can navigate or refresh its listing. Defaults to
    /// a no-op.
    #[prop_or_default]
    pub on_created: Callback<String>,
}
