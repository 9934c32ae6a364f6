use foundation::handles::Handle;
use poi::PoiSet;

use crate::anchor::{Anchor, AnchorId};
use crate::place::{PlacementBand, place_anchors};

/// Owns the current anchor set.
///
/// The set is rebuilt wholesale when the POI set is replaced, never
/// per frame. Each rebuild bumps the generation, invalidating ids handed out
/// for the previous set.
#[derive(Debug, Default)]
pub struct AnchorWorld {
    anchors: Vec<Anchor>,
    generation: u32,
}

impl AnchorWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all anchors and re-place the given POI set.
    pub fn rebuild(&mut self, pois: &PoiSet, reference_heading_deg: f64, band: PlacementBand) {
        self.anchors = place_anchors(pois, reference_heading_deg, band);
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.anchors.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn anchors_mut(&mut self) -> &mut [Anchor] {
        &mut self.anchors
    }

    pub fn id_at(&self, index: usize) -> Option<AnchorId> {
        if index < self.anchors.len() {
            Some(AnchorId(Handle::new(index as u32, self.generation)))
        } else {
            None
        }
    }

    /// Resolve an id against the current set; stale generations miss.
    pub fn anchor(&self, id: AnchorId) -> Option<&Anchor> {
        if id.generation() != self.generation {
            return None;
        }
        self.anchors.get(id.index() as usize)
    }

    pub fn visible_count(&self) -> usize {
        self.anchors.iter().filter(|a| a.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::AnchorWorld;
    use crate::place::PlacementBand;
    use poi::{Poi, PoiSet};

    fn set(records: Vec<Poi>) -> PoiSet {
        PoiSet::from_records(records).expect("valid set")
    }

    #[test]
    fn rebuild_replaces_all_anchors() {
        let mut world = AnchorWorld::new();
        let band = PlacementBand::default();

        world.rebuild(&set(vec![Poi::new("A", 0.0, 1.0)]), 0.0, band);
        assert_eq!(world.len(), 1);

        world.rebuild(
            &set(vec![Poi::new("B", 10.0, 1.0), Poi::new("C", 20.0, 2.0)]),
            0.0,
            band,
        );
        assert_eq!(world.len(), 2);
        assert_eq!(world.anchors()[0].label, "B");
    }

    #[test]
    fn stale_ids_do_not_resolve_after_rebuild() {
        let mut world = AnchorWorld::new();
        let band = PlacementBand::default();

        world.rebuild(&set(vec![Poi::new("A", 0.0, 1.0)]), 0.0, band);
        let id = world.id_at(0).expect("id");
        assert_eq!(world.anchor(id).map(|a| a.label.as_str()), Some("A"));

        world.rebuild(&set(vec![Poi::new("B", 0.0, 1.0)]), 0.0, band);
        assert!(world.anchor(id).is_none());
        let fresh = world.id_at(0).expect("id");
        assert_eq!(world.anchor(fresh).map(|a| a.label.as_str()), Some("B"));
    }

    #[test]
    fn clear_empties_the_world() {
        let mut world = AnchorWorld::new();
        world.rebuild(
            &set(vec![Poi::new("A", 0.0, 1.0)]),
            0.0,
            PlacementBand::default(),
        );
        world.clear();
        assert!(world.is_empty());
        assert_eq!(world.visible_count(), 0);
    }
}
