//! Encoder for the SVG path data mini-language.
//!
//! A [`PathBuilder`] accumulates typed drawing instructions and serializes
//! them with [`PathBuilder::build`]. Vertical coordinates are converted from
//! the document's Y-up logical space to SVG's Y-down space as instructions are
//! appended; arc instructions carry their parameters through unchanged.

use crate::geom::fmt_num;

/// The fixed single-letter SVG path commands, absolute (uppercase) and
/// relative (lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveAbs,
    MoveRel,
    LineAbs,
    LineRel,
    HLineAbs,
    HLineRel,
    VLineAbs,
    VLineRel,
    CubicAbs,
    CubicRel,
    SmoothCubicAbs,
    SmoothCubicRel,
    QuadraticAbs,
    QuadraticRel,
    SmoothQuadraticAbs,
    SmoothQuadraticRel,
    ArcAbs,
    ArcRel,
    CloseAbs,
    CloseRel,
}

impl PathCommand {
    pub fn letter(self) -> char {
        match self {
            Self::MoveAbs => 'M',
            Self::MoveRel => 'm',
            Self::LineAbs => 'L',
            Self::LineRel => 'l',
            Self::HLineAbs => 'H',
            Self::HLineRel => 'h',
            Self::VLineAbs => 'V',
            Self::VLineRel => 'v',
            Self::CubicAbs => 'C',
            Self::CubicRel => 'c',
            Self::SmoothCubicAbs => 'S',
            Self::SmoothCubicRel => 's',
            Self::QuadraticAbs => 'Q',
            Self::QuadraticRel => 'q',
            Self::SmoothQuadraticAbs => 'T',
            Self::SmoothQuadraticRel => 't',
            Self::ArcAbs => 'A',
            Self::ArcRel => 'a',
            Self::CloseAbs => 'Z',
            Self::CloseRel => 'z',
        }
    }
}

/// One drawing instruction. The parameter arity is fixed per command and
/// guaranteed by the builder methods, which are the only way instructions
/// enter a [`PathBuilder`].
#[derive(Debug, Clone)]
pub struct PathInstruction {
    pub command: PathCommand,
    pub params: Vec<f64>,
}

#[derive(Debug, Default)]
pub struct PathBuilder {
    instructions: Vec<PathInstruction>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instructions(&self) -> &[PathInstruction] {
        &self.instructions
    }

    fn push(&mut self, command: PathCommand, params: Vec<f64>) -> &mut Self {
        self.instructions.push(PathInstruction { command, params });
        self
    }

    pub fn move_abs(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::MoveAbs, vec![x, -y])
    }

    pub fn move_rel(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::MoveRel, vec![dx, -dy])
    }

    pub fn line_abs(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::LineAbs, vec![x, -y])
    }

    pub fn line_rel(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::LineRel, vec![dx, -dy])
    }

    pub fn horizontal_abs(&mut self, x: f64) -> &mut Self {
        self.push(PathCommand::HLineAbs, vec![x])
    }

    pub fn horizontal_rel(&mut self, dx: f64) -> &mut Self {
        self.push(PathCommand::HLineRel, vec![dx])
    }

    pub fn vertical_abs(&mut self, y: f64) -> &mut Self {
        self.push(PathCommand::VLineAbs, vec![-y])
    }

    pub fn vertical_rel(&mut self, dy: f64) -> &mut Self {
        self.push(PathCommand::VLineRel, vec![-dy])
    }

    /// Cubic curve through two control points to an end point, all absolute.
    pub fn cubic_abs(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::CubicAbs, vec![c1x, -c1y, c2x, -c2y, x, -y])
    }

    pub fn cubic_rel(
        &mut self,
        c1dx: f64,
        c1dy: f64,
        c2dx: f64,
        c2dy: f64,
        dx: f64,
        dy: f64,
    ) -> &mut Self {
        self.push(PathCommand::CubicRel, vec![c1dx, -c1dy, c2dx, -c2dy, dx, -dy])
    }

    /// Smooth cubic continuation: the first control point is the reflection of
    /// the previous one, so only the second control point is supplied.
    pub fn cubic_smooth_abs(&mut self, c2x: f64, c2y: f64, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::SmoothCubicAbs, vec![c2x, -c2y, x, -y])
    }

    pub fn cubic_smooth_rel(&mut self, c2dx: f64, c2dy: f64, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::SmoothCubicRel, vec![c2dx, -c2dy, dx, -dy])
    }

    pub fn quadratic_abs(&mut self, c1x: f64, c1y: f64, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::QuadraticAbs, vec![c1x, -c1y, x, -y])
    }

    pub fn quadratic_rel(&mut self, c1dx: f64, c1dy: f64, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::QuadraticRel, vec![c1dx, -c1dy, dx, -dy])
    }

    pub fn quadratic_smooth_abs(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(PathCommand::SmoothQuadraticAbs, vec![x, -y])
    }

    pub fn quadratic_smooth_rel(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.push(PathCommand::SmoothQuadraticRel, vec![dx, -dy])
    }

    /// Circular arc to an absolute end point. Arc parameters are emitted
    /// verbatim, without the Y flip applied by the other operations.
    pub fn arc_abs(&mut self, x: f64, y: f64, radius: f64, large_arc: bool, sweep: bool) -> &mut Self {
        self.push(
            PathCommand::ArcAbs,
            vec![
                radius,
                radius,
                0.0,
                if large_arc { 1.0 } else { 0.0 },
                if sweep { 1.0 } else { 0.0 },
                x,
                y,
            ],
        )
    }

    pub fn arc_rel(&mut self, dx: f64, dy: f64, radius: f64, large_arc: bool, sweep: bool) -> &mut Self {
        self.push(
            PathCommand::ArcRel,
            vec![
                radius,
                radius,
                0.0,
                if large_arc { 1.0 } else { 0.0 },
                if sweep { 1.0 } else { 0.0 },
                dx,
                dy,
            ],
        )
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::CloseAbs, Vec::new())
    }

    /// Serializes the accumulated instructions to path data. An empty builder
    /// yields an empty string.
    pub fn build(&self) -> String {
        let mut chunks = Vec::with_capacity(self.instructions.len());

        for inst in &self.instructions {
            let letter = inst.command.letter();
            let p = &inst.params;
            let chunk = match inst.command {
                PathCommand::MoveAbs
                | PathCommand::MoveRel
                | PathCommand::LineAbs
                | PathCommand::LineRel
                | PathCommand::SmoothQuadraticAbs
                | PathCommand::SmoothQuadraticRel => {
                    format!("{letter} {} {}", fmt_num(p[0]), fmt_num(p[1]))
                }
                PathCommand::HLineAbs
                | PathCommand::HLineRel
                | PathCommand::VLineAbs
                | PathCommand::VLineRel => {
                    format!("{letter} {}", fmt_num(p[0]))
                }
                PathCommand::SmoothCubicAbs
                | PathCommand::SmoothCubicRel
                | PathCommand::QuadraticAbs
                | PathCommand::QuadraticRel => {
                    format!(
                        "{letter} {} {}, {} {}",
                        fmt_num(p[0]),
                        fmt_num(p[1]),
                        fmt_num(p[2]),
                        fmt_num(p[3])
                    )
                }
                PathCommand::CubicAbs | PathCommand::CubicRel => {
                    format!(
                        "{letter} {} {}, {} {}, {} {}",
                        fmt_num(p[0]),
                        fmt_num(p[1]),
                        fmt_num(p[2]),
                        fmt_num(p[3]),
                        fmt_num(p[4]),
                        fmt_num(p[5])
                    )
                }
                PathCommand::ArcAbs | PathCommand::ArcRel => {
                    format!(
                        "{letter} {} {} {} {} {} {} {}",
                        fmt_num(p[0]),
                        fmt_num(p[1]),
                        fmt_num(p[2]),
                        fmt_num(p[3]),
                        fmt_num(p[4]),
                        fmt_num(p[5]),
                        fmt_num(p[6])
                    )
                }
                PathCommand::CloseAbs | PathCommand::CloseRel => letter.to_string(),
            };
            chunks.push(chunk);
        }

        chunks.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_line_close_encoding() {
        let mut builder = PathBuilder::new();
        builder.move_abs(0.0, 0.0).line_abs(10.0, 0.0).close();
        assert_eq!(builder.build(), "M 0 0 L 10 0 Z");
    }

    #[test]
    fn empty_builder_yields_empty_string() {
        assert_eq!(PathBuilder::new().build(), "");
    }

    #[test]
    fn vertical_coordinates_flip_on_append() {
        let mut builder = PathBuilder::new();
        builder.line_abs(5.0, 3.0).vertical_abs(2.0).horizontal_abs(4.0);
        assert_eq!(builder.build(), "L 5 -3 V -2 H 4");
    }

    #[test]
    fn curve_pairs_are_comma_separated() {
        let mut builder = PathBuilder::new();
        builder
            .cubic_abs(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
            .quadratic_abs(7.0, 8.0, 9.0, 10.0);
        assert_eq!(builder.build(), "C 1 -2, 3 -4, 5 -6 Q 7 -8, 9 -10");
    }

    #[test]
    fn arc_params_pass_through_unflipped() {
        let mut builder = PathBuilder::new();
        builder.arc_abs(10.0, 20.0, 5.0, true, false);
        assert_eq!(builder.build(), "A 5 5 0 1 0 10 20");
    }

    #[test]
    fn relative_variants_use_lowercase_letters() {
        let mut builder = PathBuilder::new();
        builder.move_rel(1.0, 1.0).line_rel(2.0, 2.0).arc_rel(3.0, 3.0, 1.0, false, true);
        assert_eq!(builder.build(), "m 1 -1 l 2 -2 a 1 1 0 0 1 3 3");
    }
}
