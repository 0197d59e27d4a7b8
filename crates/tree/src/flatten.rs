use log::trace;

/// Linearization order for [`flatten`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Every node of one generation is emitted before any node of the next.
    /// Children are appended after everything already queued, never
    /// inserted next to their parent.
    #[default]
    Shallow,
    /// Pre-order: each node is immediately followed by its whole subtree.
    Deep,
}

/// Identifies the child collection of a node type.
///
/// `flatten` never inspects nodes beyond this accessor pair, so any owned
/// tree shape can be linearized by supplying one.
pub trait ChildField<T> {
    /// The children stored under the field, if the field is present.
    fn children<'a>(&self, node: &'a T) -> Option<&'a [T]>;

    /// Detach the children, leaving the field absent.
    fn remove(&self, node: &mut T) -> Option<Vec<T>>;
}

/// Node types with one canonical child collection.
pub trait Nested: Sized {
    fn children(&self) -> Option<&[Self]>;
    fn take_children(&mut self) -> Option<Vec<Self>>;
}

/// [`ChildField`] selecting the canonical collection of a [`Nested`] type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Children;

impl<T: Nested> ChildField<T> for Children {
    #[inline]
    fn children<'a>(&self, node: &'a T) -> Option<&'a [T]> {
        node.children()
    }

    #[inline]
    fn remove(&self, node: &mut T) -> Option<Vec<T>> {
        node.take_children()
    }
}

/// [`ChildField`] built from a pair of plain accessor functions, for types
/// with more than one child collection or without a [`Nested`] impl.
pub struct FieldFns<T> {
    pub get: fn(&T) -> Option<&[T]>,
    pub remove: fn(&mut T) -> Option<Vec<T>>,
}

impl<T> Clone for FieldFns<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldFns<T> {}

impl<T> ChildField<T> for FieldFns<T> {
    #[inline]
    fn children<'a>(&self, node: &'a T) -> Option<&'a [T]> {
        (self.get)(node)
    }

    #[inline]
    fn remove(&self, node: &mut T) -> Option<Vec<T>> {
        (self.remove)(node)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    pub order: Order,
    /// Generations to descend below the input sequence. `Some(0)` returns
    /// the input itself; `None` descends to the leaves.
    pub depth: Option<usize>,
    /// Remove the child field from every emitted node.
    pub strip: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            order: Order::Shallow,
            depth: None,
            strip: true,
        }
    }
}

impl FlattenOptions {
    pub fn shallow() -> Self {
        Self::default()
    }

    pub fn deep() -> Self {
        Self {
            order: Order::Deep,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Leave the child field in place on the emitted copies.
    #[must_use]
    pub fn keep_field(mut self) -> Self {
        self.strip = false;
        self
    }
}

/// Linearize `nodes` and their descendants into one sequence.
///
/// Works on a deep copy; the caller's nodes are never modified.
pub fn flatten<T, F>(nodes: &[T], field: &F, options: &FlattenOptions) -> Vec<T>
where
    T: Clone,
    F: ChildField<T> + ?Sized,
{
    trace!(
        "[flatten] {} top-level nodes, order={:?}, depth={:?}",
        nodes.len(),
        options.order,
        options.depth
    );

    let mut out = Vec::with_capacity(nodes.len());
    let nodes = nodes.to_vec();

    match options.order {
        Order::Deep => flatten_deep(nodes, field, options.depth, options.strip, &mut out),
        Order::Shallow => flatten_shallow(nodes, field, options.depth, options.strip, &mut out),
    }

    out
}

/// [`flatten`] for a single root node.
pub fn flatten_one<T, F>(node: &T, field: &F, options: &FlattenOptions) -> Vec<T>
where
    T: Clone,
    F: ChildField<T> + ?Sized,
{
    flatten(std::slice::from_ref(node), field, options)
}

/// Children to absorb into the output, or `None` when there are none.
fn detach<T, F>(node: &mut T, field: &F, strip: bool) -> Option<Vec<T>>
where
    T: Clone,
    F: ChildField<T> + ?Sized,
{
    let children = if strip {
        field.remove(node)
    } else {
        field.children(node).map(<[T]>::to_vec)
    };

    children.filter(|c| !c.is_empty())
}

fn flatten_deep<T, F>(
    nodes: Vec<T>,
    field: &F,
    remaining: Option<usize>,
    strip: bool,
    out: &mut Vec<T>,
) where
    T: Clone,
    F: ChildField<T> + ?Sized,
{
    for mut node in nodes {
        let children = detach(&mut node, field, strip);
        out.push(node);

        if remaining == Some(0) {
            continue;
        }

        if let Some(children) = children {
            flatten_deep(children, field, remaining.map(|d| d - 1), strip, out);
        }
    }
}

fn flatten_shallow<T, F>(
    nodes: Vec<T>,
    field: &F,
    mut remaining: Option<usize>,
    strip: bool,
    out: &mut Vec<T>,
) where
    T: Clone,
    F: ChildField<T> + ?Sized,
{
    let mut generation = nodes;

    while !generation.is_empty() {
        let mut next = Vec::new();

        for mut node in generation {
            let children = detach(&mut node, field, strip);
            out.push(node);

            if remaining != Some(0)
                && let Some(children) = children
            {
                next.extend(children);
            }
        }

        generation = next;
        remaining = remaining.map(|d| d.saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod tests;
