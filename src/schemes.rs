//! Recursion schemes over [`Document`].
//!
//! All schemes run on an explicit work stack instead of the call stack, so
//! tree depth is bounded by heap, not by thread stack size. Dropping the
//! resulting trees is iterative as well (see [`Document`]). The work stack
//! holds two kinds of frames: a node (or seed) still to be expanded, and a
//! `Close` marker that, once popped, gathers the last `n` finished results
//! into one layer. Children are pushed in reverse so the leftmost child is
//! always expanded first.

use tracing::instrument;

use crate::domain::{Document, Layer, Orientation};

/// Catamorphism: strict bottom-up fold.
///
/// Cells are reduced with `leaf`, containers with `algebra` applied to the
/// layer of already-reduced children. `leaf` is called in left-to-right
/// order.
#[instrument(
    level = "trace",
    skip_all,
    fields(orientation = ?doc.orientation(), children = doc.children().len())
)]
pub fn cata<'a, A, B, L, G>(doc: &'a Document<A>, mut leaf: L, mut algebra: G) -> B
where
    L: FnMut(&'a A) -> B,
    G: FnMut(Layer<B>) -> B,
{
    enum Frame<'a, A> {
        Visit(&'a Document<A>),
        Close(Orientation, usize),
    }

    let mut work = vec![Frame::Visit(doc)];
    let mut done: Vec<B> = Vec::new();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Visit(Document::Cell(value)) => done.push(leaf(value)),
            Frame::Visit(node) => {
                if let Some((orientation, children)) = node.as_container() {
                    work.push(Frame::Close(orientation, children.len()));
                    work.extend(children.iter().rev().map(Frame::Visit));
                }
            }
            Frame::Close(orientation, n) => {
                let children = done.split_off(done.len() - n);
                done.push(algebra(Layer::new(orientation, children)));
            }
        }
    }

    match done.pop() {
        Some(result) => result,
        None => unreachable!("a fold always yields one value for the root"),
    }
}

/// Paramorphism: like [`cata`], but each reduced child arrives paired with
/// the original subtree it was reduced from.
#[instrument(
    level = "trace",
    skip_all,
    fields(orientation = ?doc.orientation(), children = doc.children().len())
)]
pub fn para<'a, A, B, L, G>(doc: &'a Document<A>, mut leaf: L, mut algebra: G) -> B
where
    L: FnMut(&'a A) -> B,
    G: FnMut(Layer<(&'a Document<A>, B)>) -> B,
{
    enum Frame<'a, A> {
        Visit(&'a Document<A>),
        Close(&'a Document<A>, Orientation, usize),
    }

    let mut work = vec![Frame::Visit(doc)];
    let mut done: Vec<(&'a Document<A>, B)> = Vec::new();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Visit(node) => match node {
                Document::Cell(value) => done.push((node, leaf(value))),
                Document::Horiz(children) | Document::Vert(children) => {
                    let orientation = match node {
                        Document::Horiz(_) => Orientation::Horiz,
                        _ => Orientation::Vert,
                    };
                    work.push(Frame::Close(node, orientation, children.len()));
                    work.extend(children.iter().rev().map(Frame::Visit));
                }
            },
            Frame::Close(node, orientation, n) => {
                let children = done.split_off(done.len() - n);
                done.push((node, algebra(Layer::new(orientation, children))));
            }
        }
    }

    match done.pop() {
        Some((_, result)) => result,
        None => unreachable!("a fold always yields one value for the root"),
    }
}

/// Hylomorphism: unfolds from `seed` and folds the result in one pass,
/// without materializing the intermediate [`Document`].
///
/// Each seed is first offered to `stop`; a `Some` becomes a leaf and is
/// reduced with `leaf`. Otherwise `coalgebra` splits the seed into a layer of
/// child seeds, unfolded left to right, whose results `algebra` combines.
///
/// Termination is the caller's responsibility: if `stop` never fires on some
/// branch, this loops (and allocates) forever. Nothing here bounds depth.
#[instrument(level = "trace", skip_all)]
pub fn hylo<S, B, R, P, C, L, G>(
    seed: S,
    mut stop: P,
    mut coalgebra: C,
    mut leaf: L,
    mut algebra: G,
) -> R
where
    P: FnMut(&S) -> Option<B>,
    C: FnMut(S) -> Layer<S>,
    L: FnMut(B) -> R,
    G: FnMut(Layer<R>) -> R,
{
    enum Frame<S> {
        Seed(S),
        Close(Orientation, usize),
    }

    let mut work = vec![Frame::Seed(seed)];
    let mut done: Vec<R> = Vec::new();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Seed(seed) => match stop(&seed) {
                Some(value) => done.push(leaf(value)),
                None => {
                    let Layer {
                        orientation,
                        children,
                    } = coalgebra(seed);
                    work.push(Frame::Close(orientation, children.len()));
                    work.extend(children.into_iter().rev().map(Frame::Seed));
                }
            },
            Frame::Close(orientation, n) => {
                let children = done.split_off(done.len() - n);
                done.push(algebra(Layer::new(orientation, children)));
            }
        }
    }

    match done.pop() {
        Some(result) => result,
        None => unreachable!("an unfold always yields one value for the seed"),
    }
}

/// Anamorphism: top-down unfold of a [`Document`] from a seed.
///
/// Same termination contract as [`hylo`]: a `stop` that never fires on some
/// branch diverges.
#[instrument(level = "trace", skip_all)]
pub fn ana<S, B, P, C>(seed: S, stop: P, coalgebra: C) -> Document<B>
where
    P: FnMut(&S) -> Option<B>,
    C: FnMut(S) -> Layer<S>,
{
    hylo(seed, stop, coalgebra, Document::Cell, Layer::into_document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document<&'static str> {
        Document::vert(vec![
            Document::cell("a"),
            Document::horiz(vec![Document::cell("b"), Document::cell("c")]),
            Document::cell("d"),
        ])
    }

    fn halve(n: u32) -> Layer<u32> {
        Layer::horiz(vec![n - 1, n - 1])
    }

    fn stop_at_zero(n: &u32) -> Option<&'static str> {
        (*n == 0).then_some("leaf")
    }

    #[test]
    fn test_cata_visits_leaves_left_to_right() {
        let mut order = Vec::new();
        let joined = cata(
            &sample(),
            |s| {
                order.push(*s);
                s.to_string()
            },
            |layer| format!("{}({})", layer.orientation, layer.children.join(",")),
        );
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert_eq!(joined, "vert(a,horiz(b,c),d)");
    }

    #[test]
    fn test_cata_on_empty_container_calls_algebra_with_no_children() {
        let doc: Document<u8> = Document::horiz(vec![]);
        let n = cata(&doc, |_| 1usize, |layer| layer.children.len() + 100);
        assert_eq!(n, 100);
    }

    #[test]
    fn test_ana_builds_balanced_tree() {
        let doc = ana(2, stop_at_zero, halve);
        let leaf = || Document::cell("leaf");
        assert_eq!(
            doc,
            Document::horiz(vec![
                Document::horiz(vec![leaf(), leaf()]),
                Document::horiz(vec![leaf(), leaf()]),
            ])
        );
    }

    #[test]
    fn test_ana_stop_on_seed_yields_single_cell() {
        assert_eq!(ana(0, stop_at_zero, halve), Document::cell("leaf"));
    }

    #[test]
    fn test_hylo_matches_cata_after_ana() {
        let fused = hylo(4, stop_at_zero, halve, |_| 1usize, |layer| layer.children.iter().sum());
        let unfolded = ana(4, stop_at_zero, halve);
        let staged = cata(&unfolded, |_| 1usize, |layer| layer.children.iter().sum());
        assert_eq!(fused, 16);
        assert_eq!(fused, staged);
    }

    #[test]
    fn test_hylo_handles_very_deep_unfolds() {
        let depth = hylo(
            100_000u32,
            |n| (*n == 0).then_some(()),
            |n| Layer::vert(vec![n - 1]),
            |_| 1u32,
            |layer| layer.children[0] + 1,
        );
        assert_eq!(depth, 100_001);
    }

    #[test]
    fn test_para_sees_original_children() {
        // counts children that are containers, which a plain cata cannot tell
        let nested = para(
            &sample(),
            |_| 0usize,
            |layer| {
                layer
                    .children
                    .iter()
                    .map(|(original, below)| below + usize::from(!original.is_cell()))
                    .sum()
            },
        );
        assert_eq!(nested, 1);
    }
}
