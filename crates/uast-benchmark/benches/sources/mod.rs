pub(crate) static SOURCES: [(&str, &str); 2] = [
    (
        "simple.go",
        r#"package main

func main() {
	println(42)
}
"#,
    ),
    (
        "medium.go",
        r#"package shapes

import (
	"fmt"
	"math"
)

// Shape is implemented by every figure.
type Shape interface {
	Area() float64
}

type Circle struct {
	Radius float64 `json:"radius"`
}

func (c Circle) Area() float64 { return math.Pi * c.Radius * c.Radius }

func describe(shapes []Shape) (total float64) {
	for i, shape := range shapes {
		switch s := shape.(type) {
		case Circle:
			fmt.Println(i, "circle", s.Radius)
		default:
			fmt.Println(i, "unknown")
		}
		if area := shape.Area(); area > 0 {
			total += area
		} else {
			continue
		}
	}
	return
}
"#,
    ),
];
