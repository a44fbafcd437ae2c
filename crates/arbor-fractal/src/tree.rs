use crate::params::TreeParameters;
use crate::segment::{BranchSegment, Point};

/// Receiver for generated geometry.
///
/// Renderers implement this to turn segments into draw commands; tests collect
/// them into a `Vec`.
pub trait SegmentSink {
    fn segment(&mut self, segment: &BranchSegment);

    /// Called where a branch terminates because it fell below the cutoff.
    fn leaf(&mut self, tip: Point, depth: u32) {
        let _ = (tip, depth);
    }
}

impl SegmentSink for Vec<BranchSegment> {
    fn segment(&mut self, segment: &BranchSegment) {
        self.push(*segment);
    }
}

/// Summary of one generation pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TreeStats {
    /// Segments emitted.
    pub segments: u32,
    /// Terminating calls (branch tips below the cutoff).
    pub leaves: u32,
    /// Levels that produced at least one segment.
    pub levels: u32,
    /// Deepest call level reached, counting the terminating calls.
    pub depth: u32,
}

/// Pending branch on the explicit work stack.
///
/// Each frame carries its own origin and heading, which replaces the
/// push/translate/rotate/pop sequence of a matrix-stack renderer.
#[derive(Debug, Copy, Clone)]
struct Frame {
    origin: Point,
    heading: f32,
    length: f32,
    depth: u32,
}

/// Binary fractal tree generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalTree {
    params: TreeParameters,
}

impl FractalTree {
    pub fn new(params: TreeParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TreeParameters {
        &self.params
    }

    /// Emits the tree rooted at the origin, trunk pointing up.
    pub fn draw<S: SegmentSink + ?Sized>(&self, sink: &mut S) -> TreeStats {
        self.draw_from(sink, Point::origin(), 0.0)
    }

    /// Emits the tree rooted at `root` with the trunk along `heading` radians.
    ///
    /// Segments are emitted depth-first; the `+angle` child is fully emitted
    /// before the `-angle` child.
    pub fn draw_from<S: SegmentSink + ?Sized>(
        &self,
        sink: &mut S,
        root: Point,
        heading: f32,
    ) -> TreeStats {
        let mut stats = TreeStats::default();

        // Unbounded lengths never reach the cutoff.
        if !self.params.trunk_length.is_finite() {
            return stats;
        }

        let angle = self.params.angle_radians();
        let shrink = self.params.shrink_factor();
        let min_length = self.params.min_length();

        let mut stack = vec![Frame {
            origin: root,
            heading,
            length: self.params.trunk_length,
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            stats.depth = stats.depth.max(frame.depth + 1);

            // Negated comparison so NaN terminates too.
            if !(frame.length >= min_length) {
                // A trunk below the cutoff is an empty tree, not a leaf.
                if frame.depth > 0 {
                    sink.leaf(frame.origin, frame.depth);
                    stats.leaves += 1;
                }
                continue;
            }

            let segment = BranchSegment {
                start: frame.origin,
                heading: frame.heading,
                length: frame.length,
                depth: frame.depth,
            };
            sink.segment(&segment);
            stats.segments += 1;
            stats.levels = stats.levels.max(frame.depth + 1);

            let tip = segment.end();
            let child_length = frame.length * shrink;

            // LIFO: push the second child first.
            stack.push(Frame {
                origin: tip,
                heading: frame.heading - angle,
                length: child_length,
                depth: frame.depth + 1,
            });
            stack.push(Frame {
                origin: tip,
                heading: frame.heading + angle,
                length: child_length,
                depth: frame.depth + 1,
            });
        }

        stats
    }

    /// Collects every segment in emission order.
    pub fn segments(&self) -> Vec<BranchSegment> {
        let mut out = Vec::new();
        self.draw(&mut out);
        out
    }
}

/// Draws a tree with the default shrink factor and cutoff.
///
/// `max_length` is the gradient reference, not a cap on `length`.
pub fn draw_tree<S: SegmentSink + ?Sized>(
    sink: &mut S,
    length: f32,
    max_length: f32,
    angle_degrees: f32,
) -> TreeStats {
    let params = TreeParameters::new(length, angle_degrees).with_max_length(max_length);
    FractalTree::new(params).draw(sink)
}
