use std::collections::HashMap;

use tripboard_boundary::{Coordinate, PlaceSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The searched location the map is centered on.
    Location,
    Weather,
    Places,
    Bookmarks,
    Travel,
}

/// Issued for every request whose response updates a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub panel: Panel,
    pub generation: u64,
}

/// Monotonic request counters, one per panel.
#[derive(Debug, Default)]
pub struct Generations {
    latest: HashMap<Panel, u64>,
}

impl Generations {
    pub fn issue(&mut self, panel: Panel) -> Ticket {
        let generation = self.latest.entry(panel).or_default();
        *generation += 1;
        Ticket {
            panel,
            generation: *generation,
        }
    }

    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.get(&ticket.panel).copied() == Some(ticket.generation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedDestination {
    pub name: String,
    pub address: Option<String>,
    pub coordinate: Coordinate,
}

/// Everything the page remembers between user actions.
#[derive(Debug, Default)]
pub struct ViewState {
    location: Option<ResolvedLocation>,
    destination: Option<SelectedDestination>,
    category: Option<String>,
    source: PlaceSource,
    busy: usize,
    generations: Generations,
}

impl ViewState {
    #[must_use]
    pub fn new(category: Option<String>, source: PlaceSource) -> Self {
        Self {
            category,
            source,
            ..Default::default()
        }
    }

    pub const fn location(&self) -> Option<&ResolvedLocation> {
        self.location.as_ref()
    }

    pub fn set_location(&mut self, location: ResolvedLocation) {
        self.location = Some(location);
    }

    pub const fn destination(&self) -> Option<&SelectedDestination> {
        self.destination.as_ref()
    }

    pub fn set_destination(&mut self, destination: SelectedDestination) {
        self.destination = Some(destination);
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    pub const fn source(&self) -> PlaceSource {
        self.source
    }

    pub fn set_source(&mut self, source: PlaceSource) {
        self.source = source;
    }

    pub const fn is_busy(&self) -> bool {
        self.busy > 0
    }

    /// Returns `true` if the page just became busy.
    pub fn begin_busy(&mut self) -> bool {
        self.busy += 1;
        self.busy == 1
    }

    /// Returns `true` if the page is idle again.
    pub fn end_busy(&mut self) -> bool {
        match self.busy {
            0 => false,
            n => {
                self.busy = n - 1;
                self.busy == 0
            }
        }
    }

    pub fn issue(&mut self, panel: Panel) -> Ticket {
        self.generations.issue(panel)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.generations.is_latest(ticket)
    }
}
