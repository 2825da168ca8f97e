/// Application service backing every catalog endpoint.
///
/// Collaborators are injected at construction so each repository and the
/// event publisher can be swapped for in-memory doubles in tests. The
/// per-entity service traits are implemented on this struct in their own
/// domain modules.
#[derive(Clone)]
pub struct Service<CA, MI, MO, IP, IA, PM, EV> {
    pub(crate) category_repository: CA,
    pub(crate) item_repository: MI,
    pub(crate) modifier_repository: MO,
    pub(crate) price_repository: IP,
    pub(crate) availability_repository: IA,
    pub(crate) promotion_repository: PM,
    pub(crate) event_publisher: EV,
}

impl<CA, MI, MO, IP, IA, PM, EV> Service<CA, MI, MO, IP, IA, PM, EV> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_repository: CA,
        item_repository: MI,
        modifier_repository: MO,
        price_repository: IP,
        availability_repository: IA,
        promotion_repository: PM,
        event_publisher: EV,
    ) -> Self {
        Self {
            category_repository,
            item_repository,
            modifier_repository,
            price_repository,
            availability_repository,
            promotion_repository,
            event_publisher,
        }
    }
}
