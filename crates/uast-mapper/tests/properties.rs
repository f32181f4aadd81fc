//! Invariants every mapped file satisfies, checked over a corpus of Go
//! sources and their CRLF variants.

use text_size::TextSize;
use uast_inputs::{LineColumn, SourceFile};
use uast_mapper::{Config, Uast, map_file};
use uast_tree::{Kind, Node};

const CORPUS: &[&str] = &[
    "package main\nfunc main(){}\n",
    r#"// Package shapes has a doc comment.
package shapes

import (
	"fmt"
	m "math"
	_ "embed"
)

/* Shape is
   implemented by every figure. */
type Shape interface {
	fmt.Stringer
	Area() float64
	Scale(factor float64) Shape
}

type Rect struct {
	Base
	*Origin
	W, H float64 `json:"w"` // sizes
}

type (
	Base   struct{}
	Origin struct{ X, Y int }
	Alias  = Rect
)

func (r Rect) Area() float64 { return r.W * r.H }

func (r *Rect) Scale(factor float64) Shape {
	r.W, r.H = r.W*factor, r.H*factor
	return r
}

func circle(radius float64) float64 {
	return m.Pi * radius * radius
}
"#,
    r#"package flow

const (
	A = iota
	B
	C = "ç∂" // non-ASCII text
)

var table = map[string][]int{
	"a": {1, 2},
	"b": nil,
}

func classify(x interface{}, xs ...int) (kind string, err error) {
	switch v := x.(type) {
	case int, int64:
		kind = "int"
	case string:
		kind = "string: " + v
	case nil:
	default:
		kind = fmt.Sprint(v)
	}

	switch {
	case len(xs) > 2:
		fallthrough
	case len(xs) == 1:
		kind += "!"
	}
	return
}

func loops(n int) (total int) {
outer:
	for i := 0; i < n; i++ {
		for j := range n {
			if j > i {
				continue outer
			} else if j == i {
				break
			} else {
				total += j
			}
		}
	}
	for k, v := range table {
		_, _ = k, v
	}
	for total < 100 {
		total <<= 1
	}
	for {
		goto done
	}
done:
	return total
}
"#,
    r#"package conc

import "sync"

type result struct {
	value int
	err   error
}

func fan(in <-chan int, out chan<- result, done chan struct{}) {
	var wg sync.WaitGroup
	defer close(out)
	for v := range in {
		wg.Add(1)
		go func(v int) {
			defer wg.Done()
			select {
			case out <- result{value: v * v}:
			case <-done:
				return
			case x, ok := <-in:
				_, _ = x, ok
			default:
			}
		}(v)
	}
	wg.Wait()
}

func slices(xs []byte, p *[4]int) []byte {
	a := xs[1:]
	b := xs[:2:3]
	c := xs[:]
	_ = (*p)[0]
	_ = [...]string{"x", "y"}
	_ = &result{err: nil}
	var f func(int) (int, error)
	_ = f
	return append(a, append(b, c...)...)
}
"#,
    "package tail\n\nvar x = 'x' /* between */ + 1 // last comment without newline",
    "package raw\n\nvar doc = `\nfirst line\n  second line\n`\n\nvar s = \"tab\\t and quote\\\"\"\n",
    "\n\n  package lead // comment on the package line\n\nfunc f(a, b int,\n) (int, int) {\n\treturn b,\n\t\ta\n}\n",
    "package semis; import \"fmt\"; func g() { fmt.Println(1); ; x := 2; _ = x }",
];

#[track_caller]
fn uast(text: &str) -> Uast {
    let file = SourceFile::new("corpus.go", text);
    let ast = uast_parse::parse(text).unwrap_or_else(|error| panic!("{}\n{text}", error.message()));
    map_file(&file, &ast, Config::default()).unwrap_or_else(|error| panic!("{error}\n{text}"))
}

/// Every source of the corpus, then each of them with CRLF line endings.
fn sources() -> impl Iterator<Item = String> {
    let plain = CORPUS.iter().map(|text| (*text).to_owned());
    let crlf = CORPUS.iter().map(|text| text.replace('\n', "\r\n"));
    plain.chain(crlf)
}

fn is_space(text: &str) -> bool {
    text.bytes().all(|byte| byte <= b' ')
}

#[test]
fn tree_covers_the_whole_file() {
    for text in sources() {
        let tree = uast(&text).tree;
        let first = text.len() - text.trim_start_matches(|ch: char| ch <= ' ').len();
        assert_eq!(usize::from(tree.span().start()), first, "{text:?}");
        assert_eq!(usize::from(tree.span().end()), text.len(), "{text:?}");
        assert!(tree.children.last().is_some_and(|eof| eof.has_kind(Kind::EOF)));
    }
}

#[test]
fn leaves_account_for_every_byte() {
    for text in sources() {
        let tree = uast(&text).tree;
        let mut offset = TextSize::new(0);
        for leaf in tree.leaves() {
            let gap = &text[usize::from(offset)..usize::from(leaf.span().start())];
            assert!(is_space(gap), "uncovered {gap:?} before {:?} in {text:?}", leaf.token);
            offset = leaf.span().end();
        }
        assert_eq!(usize::from(offset), text.len());
    }
}

fn check_order(node: &Node) {
    if node.is_leaf() {
        assert!(node.token.is_some(), "leaf without token: {}", node.native_node);
        return;
    }
    assert!(node.token.is_none());
    let first = &node.children[0];
    let last = &node.children[node.children.len() - 1];
    assert_eq!(node.span().start(), first.span().start());
    assert_eq!(node.span().end(), last.span().end());
    for pair in node.children.windows(2) {
        assert!(
            pair[0].span().end() <= pair[1].span().start(),
            "{} overlaps {}",
            pair[0].native_node,
            pair[1].native_node
        );
    }
    node.children.iter().for_each(check_order);
}

#[test]
fn children_are_ordered_and_disjoint() {
    for text in sources() {
        check_order(&uast(&text).tree);
    }
}

#[test]
fn every_comment_appears_once() {
    for text in sources() {
        let ast = uast_parse::parse(&text).unwrap_or_else(|error| panic!("{}", error.message()));
        let uast = uast(&text);

        let in_tree = uast
            .tree
            .descendants()
            .filter(|node| node.has_kind(Kind::COMMENT))
            .map(|node| (node.span().start(), node.token.as_ref().map(|token| token.value.clone())))
            .collect::<Vec<_>>();

        assert_eq!(in_tree.len(), ast.comments().count(), "{text:?}");
        assert_eq!(uast.comments.len(), in_tree.len());
        for ((start, value), (comment, native)) in in_tree.iter().zip(uast.comments.iter().zip(ast.comments())) {
            assert_eq!(*start, native.slash);
            assert_eq!(value.as_deref(), Some(comment.text.as_str()));
            assert!(comment.text.starts_with("//") || comment.text.starts_with("/*"));
        }
    }
}

#[test]
fn token_values_are_source_slices() {
    for text in sources() {
        let file = SourceFile::new("corpus.go", text.as_str());
        let positions = file.position_index();
        let tree = uast(&text).tree;
        for leaf in tree.leaves() {
            let token = leaf.token.as_ref().unwrap();
            assert_eq!(token.value, &text[leaf.span()]);
            let position = positions.line_column(leaf.span().start()).unwrap();
            assert_eq!((token.line, token.column), (position.line, position.column));
        }
    }
}

#[test]
fn token_positions_round_trip() {
    for text in sources() {
        let file = SourceFile::new("corpus.go", text.as_str());
        let positions = file.position_index();
        let tree = uast(&text).tree;
        for leaf in tree.leaves() {
            let token = leaf.token.as_ref().unwrap();
            let offset = positions.offset(LineColumn::new(token.line, token.column));
            assert_eq!(offset, Some(leaf.span().start()), "{token:?} in {text:?}");
        }
    }
}

#[test]
fn token_table_lists_leaves_in_order() {
    for text in sources() {
        let uast = uast(&text);
        let leaves = uast
            .tree
            .leaves()
            .filter(|leaf| !leaf.has_kind(Kind::COMMENT) && !leaf.has_kind(Kind::EOF))
            .filter_map(|leaf| leaf.token.as_ref())
            .map(|token| (token.value.as_str(), token.line, token.column))
            .collect::<Vec<_>>();
        let tokens = uast
            .tokens
            .iter()
            .map(|token| (token.text.as_str(), token.range.start_line, token.range.start_column))
            .collect::<Vec<_>>();
        assert_eq!(leaves, tokens);
    }
}

#[test]
fn mapping_is_deterministic() {
    for text in sources() {
        let first = uast(&text);
        let second = uast(&text);
        assert_eq!(first.tree, second.tree);
        assert_eq!(first.tokens, second.tokens);
        assert_eq!(first.comments, second.comments);
    }
}
