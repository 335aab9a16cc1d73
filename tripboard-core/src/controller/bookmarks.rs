use super::{Surface, ViewController};
use crate::{
    chart::ChartBackend,
    error::Error,
    gateways::TravelGateway,
    map::MapLayer,
    render::{BookmarkList, BookmarkRow, PanelContent, Place},
    state::Panel,
    usecases,
    view::{View, ViewUpdate},
};

impl<G, V, M, C> ViewController<G, V, M, C>
where
    G: TravelGateway,
    V: View,
    M: MapLayer,
    C: ChartBackend,
{
    /// Replaces the shown list with the backend's current list.
    pub async fn load_bookmarks(&self) {
        let ticket = self.issue(Panel::Bookmarks);
        self.view.apply(ViewUpdate::Bookmarks(PanelContent::Loading));
        let result = self.gateway.bookmarks().await;
        if self.is_stale(ticket) {
            return;
        }
        match result {
            Ok(bookmarks) => {
                let list = BookmarkList::new(&bookmarks);
                self.view.apply(ViewUpdate::Bookmarks(PanelContent::Ready(list)));
            }
            Err(err) => self.report(Surface::Panel(Panel::Bookmarks), &Error::from(err)),
        }
    }

    pub async fn bookmark_place(&self, place: &Place) {
        let bookmark = usecases::new_bookmark(place);
        match self.gateway.create_bookmark(&bookmark).await {
            Ok(()) => {
                log::info!("Bookmarked {}", place.name);
                self.load_bookmarks().await;
            }
            Err(err) => self.report(Surface::Background, &Error::from(err)),
        }
    }

    pub async fn delete_bookmark(&self, id: i64) {
        match self.gateway.delete_bookmark(id).await {
            Ok(()) => {
                log::info!("Deleted bookmark #{id}");
                self.load_bookmarks().await;
            }
            Err(err) => self.report(Surface::Background, &Error::from(err)),
        }
    }

    pub fn recenter_bookmark(&self, bookmark: &BookmarkRow) {
        self.map
            .borrow_mut()
            .set_center(bookmark.coordinate, self.config.map.bookmark_zoom);
    }
}
