//! Host-side capabilities consumed by the scheduler.
//!
//! Adapters (Bevy, tests, custom scene graphs) implement these traits and pass
//! themselves into [`TweenOwner`](crate::TweenOwner) operations.

use crate::property::Property;

/// Read/write access to one animated entity's scalar properties.
pub trait PropertyAccess {
    /// Handle of a renderable that carries an indirect property (opacity).
    type Target: Clone;

    /// Current value of a direct property on the owner.
    fn read(&self, property: Property) -> f32;

    /// Write a direct property on the owner. When `snap` is set the host is expected to
    /// truncate toward zero (see [`snap_value`](crate::property::snap_value)).
    fn write(&mut self, property: Property, value: f32, snap: bool);

    /// Current value of an indirect property on a resolved render target.
    fn read_target(&self, target: &Self::Target, property: Property) -> f32;

    fn write_target(&mut self, target: &Self::Target, property: Property, value: f32);
}

/// Walks the owner's hierarchy to discover render targets.
pub trait HierarchyWalker: PropertyAccess {
    type Node;

    /// The owner itself.
    fn root(&self) -> Self::Node;

    /// Direct children of `node`, in host order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Append every renderable attached to `node` whose opacity can be written.
    fn render_targets(&self, node: &Self::Node, out: &mut Vec<Self::Target>);
}

/// Depth-first, pre-order collection of every render target under the owner
/// (the owner's own renderables first).
pub fn collect_render_targets<H: HierarchyWalker + ?Sized>(host: &H) -> Vec<H::Target> {
    let mut targets = Vec::new();
    let mut stack = vec![host.root()];
    while let Some(node) = stack.pop() {
        host.render_targets(&node, &mut targets);
        let mut children = host.children(&node);
        // Reverse so the first child is visited next.
        children.reverse();
        stack.extend(children);
    }
    targets
}
