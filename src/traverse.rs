//! Effectful, structure-preserving traversal.

use tracing::instrument;

use crate::domain::{Document, Layer, Node};
use crate::effect::{Effect, Fallible, Journal, Logged, Optional};

/// Applies `f` to every cell inside the effect context `E`, rebuilding the
/// same shape around the results.
///
/// Leaves are visited left to right, each one only after the effects of
/// everything before it have been sequenced. When `E` short-circuits
/// (`Optional`, `Fallible`), no leaf after the failing one is visited and no
/// partial tree escapes.
///
/// Recursion follows the tree depth on the call stack; the folds in
/// [`crate::schemes`] are the stack-safe option for pathologically deep trees.
///
/// ```
/// use celltree::{traverse_m, Document, Optional};
///
/// let doc = Document::horiz(vec![Document::cell("1"), Document::cell("2")]);
/// let parsed = traverse_m::<Optional, _, _, _>(doc, |s| s.parse::<u8>().ok());
/// let expected = Document::horiz(vec![Document::cell(1), Document::cell(2)]);
/// assert_eq!(parsed, Some(expected));
/// ```
#[instrument(
    level = "trace",
    skip_all,
    fields(orientation = ?doc.orientation(), children = doc.children().len())
)]
pub fn traverse_m<E, A, B, F>(doc: Document<A>, mut f: F) -> E::Wrapped<Document<B>>
where
    E: Effect,
    F: FnMut(A) -> E::Wrapped<B>,
{
    walk::<E, A, B, F>(doc, &mut f)
}

fn walk<E, A, B, F>(doc: Document<A>, f: &mut F) -> E::Wrapped<Document<B>>
where
    E: Effect,
    F: FnMut(A) -> E::Wrapped<B>,
{
    match doc.into_node() {
        Node::Cell(value) => E::map::<B, Document<B>, _>(f(value), Document::Cell),
        Node::Container(Layer {
            orientation,
            children,
        }) => {
            let children = walk_children::<E, A, B, F>(children, f);
            E::map::<Vec<Document<B>>, Document<B>, _>(children, move |children| {
                Document::container(orientation, children)
            })
        }
    }
}

fn walk_children<E, A, B, F>(
    children: Vec<Document<A>>,
    f: &mut F,
) -> E::Wrapped<Vec<Document<B>>>
where
    E: Effect,
    F: FnMut(A) -> E::Wrapped<B>,
{
    // lazy: the context decides how far the iterator is driven
    let walked = children
        .into_iter()
        .map(|child| walk::<E, A, B, F>(child, f));
    E::sequence::<Document<B>, _>(walked)
}

/// [`traverse_m`] in the [`Optional`] context.
pub fn traverse_option<A, B, F>(doc: Document<A>, f: F) -> Option<Document<B>>
where
    F: FnMut(A) -> Option<B>,
{
    traverse_m::<Optional, A, B, F>(doc, f)
}

/// [`traverse_m`] in the [`Fallible`] context; the first error wins.
pub fn traverse_result<A, B, Er, F>(doc: Document<A>, f: F) -> Result<Document<B>, Er>
where
    F: FnMut(A) -> Result<B, Er>,
{
    traverse_m::<Fallible<Er>, A, B, F>(doc, f)
}

/// [`traverse_m`] in the [`Journal`] context; the log follows leaf order.
pub fn traverse_logged<A, B, L, F>(doc: Document<A>, f: F) -> Logged<Document<B>, L>
where
    F: FnMut(A) -> Logged<B, L>,
{
    traverse_m::<Journal<L>, A, B, F>(doc, f)
}
