mod bookmarks;
mod map;
mod places;
mod search;
mod travel;
mod weather;

pub use self::{
    bookmarks::Bookmarks,
    map::{LeafletLayer, Map},
    places::Places,
    search::SearchForm,
    travel::Travel,
    weather::Weather,
};
