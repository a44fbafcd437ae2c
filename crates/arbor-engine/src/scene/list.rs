use crate::coords::{Transform2D, Vec2};

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Transforms
///
/// Shape helpers map their geometry through the current transform when they
/// record, so renderers only ever see logical screen pixels. The stack mirrors
/// a classic matrix stack:
///
/// ```ignore
/// draw_list.push_transform();
/// draw_list.translate(anchor);
/// draw_list.rotate(angle);
/// // ... push shapes in the rotated frame ...
/// draw_list.pop_transform();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    transform: Transform2D,
    transform_stack: Vec<Transform2D>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and resets the transform. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.transform = Transform2D::IDENTITY;
        self.transform_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an already-transformed draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    // ── transform stack ───────────────────────────────────────────────────

    #[inline]
    pub fn current_transform(&self) -> Transform2D {
        self.transform
    }

    /// Saves the current transform. Calls must be balanced with [`pop_transform`].
    #[inline]
    pub fn push_transform(&mut self) {
        self.transform_stack.push(self.transform);
    }

    /// Restores the transform saved by the matching [`push_transform`].
    ///
    /// An unbalanced pop resets to identity (and asserts in debug builds).
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform = self.transform_stack.pop().unwrap_or(Transform2D::IDENTITY);
    }

    /// Right-multiplies `m` onto the current transform (applies in the local frame).
    #[inline]
    pub fn apply_transform(&mut self, m: Transform2D) {
        self.transform = self.transform * m;
    }

    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.apply_transform(Transform2D::translation(offset));
    }

    /// Clockwise on screen for positive `radians`.
    #[inline]
    pub fn rotate(&mut self, radians: f32) {
        self.apply_transform(Transform2D::rotation(radians));
    }

    #[inline]
    pub fn scale(&mut self, s: f32) {
        self.apply_transform(Transform2D::scale(s));
    }

    // ── ordering ──────────────────────────────────────────────────────────

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::LineCmd;

    fn lines(list: &mut DrawList) -> Vec<LineCmd> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.clone(),
            })
            .collect()
    }

    #[test]
    fn identity_records_geometry_unchanged() {
        let mut list = DrawList::new();
        list.push_line(ZIndex::SCENE, Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), 2.0, Color::RED);
        let l = &lines(&mut list)[0];
        assert_eq!(l.start, Vec2::new(1.0, 2.0));
        assert_eq!(l.end, Vec2::new(3.0, 4.0));
        assert_eq!(l.thickness, 2.0);
    }

    #[test]
    fn translate_and_scale_map_lines() {
        let mut list = DrawList::new();
        list.scale(0.5);
        list.translate(Vec2::new(1280.0, 1440.0));
        list.push_line(ZIndex::SCENE, Vec2::zero(), Vec2::new(0.0, -350.0), 10.0, Color::WHITE);

        let l = &lines(&mut list)[0];
        assert_eq!(l.start, Vec2::new(640.0, 720.0));
        assert_eq!(l.end, Vec2::new(640.0, 545.0));
        assert_eq!(l.thickness, 5.0);
    }

    #[test]
    fn pop_restores_parent_transform() {
        let mut list = DrawList::new();
        list.translate(Vec2::new(10.0, 0.0));
        list.push_transform();
        list.translate(Vec2::new(0.0, 10.0));
        list.rotate(1.0);
        list.pop_transform();

        assert_eq!(list.current_transform(), Transform2D::translation(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        let p = Vec2::zero();
        list.push_line(ZIndex::OVERLAY, p, p, 1.0, Color::RED);
        list.push_line(ZIndex::SCENE, p, p, 1.0, Color::WHITE);
        list.push_line(ZIndex::SCENE, p, p, 1.0, Color::BLACK);

        let colors: Vec<Color> = lines(&mut list).iter().map(|l| l.color).collect();
        assert_eq!(colors, vec![Color::WHITE, Color::BLACK, Color::RED]);
    }

    #[test]
    fn clear_resets_items_and_transform() {
        let mut list = DrawList::new();
        list.push_transform();
        list.translate(Vec2::new(5.0, 5.0));
        list.push_line(ZIndex::SCENE, Vec2::zero(), Vec2::zero(), 1.0, Color::RED);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.current_transform(), Transform2D::IDENTITY);
    }
}
