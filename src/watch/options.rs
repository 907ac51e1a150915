use crate::constants::WILDCARD_DESTINATION;

/// Option setter applied to [`WatchOptions`] at watcher creation
pub type WatchOption = Box<dyn FnOnce(&mut WatchOptions) + Send>;

/// Describes which routes a watcher receives
///
/// The default destination is empty, which only matches routes whose
/// destination is empty too. [`WILDCARD_DESTINATION`] matches every route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchOptions {
    /// Destination to watch, usually a service name
    pub destination: String,
}

impl WatchOptions {
    /// Apply setters in order; later setters win.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = WatchOption>,
    {
        let mut opts = Self::default();
        for apply in options {
            apply(&mut opts);
        }
        opts
    }

    pub fn is_wildcard(&self) -> bool {
        self.destination == WILDCARD_DESTINATION
    }

    /// Whether an event for `destination` passes this filter
    pub fn matches(
        &self,
        destination: &str,
    ) -> bool {
        self.is_wildcard() || self.destination == destination
    }
}

/// Watch routes of a single destination, or every route with `"*"`
pub fn watch_destination(destination: impl Into<String>) -> WatchOption {
    let destination = destination.into();
    Box::new(move |opts: &mut WatchOptions| {
        opts.destination = destination;
    })
}
