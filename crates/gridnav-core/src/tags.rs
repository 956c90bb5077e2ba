//! Visualization tags: [`Role`] and the [`TagLayer`] annotation grid.
//!
//! Tags are cosmetic. They are kept in a layer parallel to the [`Grid`] and
//! never take part in cell identity or in search decisions.

use std::fmt;

use crate::geom::{Dims, Pos};
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// What a position currently represents to a renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Wall,
    Open,
    Start,
    Stop,
    Explored,
    Frontier,
    Solution,
}

impl Role {
    /// Single-character glyph for text output.
    pub const fn glyph(self) -> char {
        match self {
            Role::Wall => '#',
            Role::Open => '.',
            Role::Start => 'S',
            Role::Stop => 'G',
            Role::Explored => 'x',
            Role::Frontier => 'o',
            Role::Solution => '*',
        }
    }

    /// Endpoint tags stay put once painted.
    #[inline]
    const fn is_endpoint(self) -> bool {
        matches!(self, Role::Start | Role::Stop)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Wall => "wall",
            Role::Open => "open",
            Role::Start => "start",
            Role::Stop => "stop",
            Role::Explored => "explored",
            Role::Frontier => "frontier",
            Role::Solution => "solution",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// TagLayer
// ---------------------------------------------------------------------------

/// Per-position [`Role`] annotations for one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLayer {
    dims: Dims,
    roles: Vec<Role>,
}

impl TagLayer {
    /// A layer with every position tagged [`Role::Wall`] or [`Role::Open`]
    /// according to `grid`.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            dims: grid.dims(),
            roles: grid.cells().map(|c| base_role(c.passable)).collect(),
        }
    }

    /// Restore the wall/open base tags, dropping all search annotations.
    pub fn reset(&mut self, grid: &Grid) {
        *self = Self::from_grid(grid);
    }

    /// The tag at `p`, or `None` if out of bounds.
    pub fn get(&self, p: Pos) -> Option<Role> {
        self.dims.index(p).map(|i| self.roles[i])
    }

    /// Paint `p` with `role`. Start and stop tags are never overwritten by
    /// later search annotations. Out-of-bounds positions are ignored.
    pub fn paint(&mut self, p: Pos, role: Role) {
        let Some(i) = self.dims.index(p) else {
            return;
        };
        if self.roles[i].is_endpoint() && !role.is_endpoint() {
            return;
        }
        self.roles[i] = role;
    }

    /// Number of positions carrying `role`.
    pub fn count(&self, role: Role) -> usize {
        self.roles.iter().filter(|&&r| r == role).count()
    }
}

fn base_role(passable: bool) -> Role {
    if passable { Role::Open } else { Role::Wall }
}

impl fmt::Display for TagLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.dims.cols as usize;
        for (r, row) in self.roles.chunks(cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for role in row {
                write!(f, "{}", role.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_matrix(&[[true, false], [true, true]]).unwrap()
    }

    #[test]
    fn base_tags_follow_passability() {
        let layer = TagLayer::from_grid(&grid());
        assert_eq!(layer.get(Pos::new(0, 1)), Some(Role::Wall));
        assert_eq!(layer.get(Pos::new(1, 1)), Some(Role::Open));
        assert_eq!(layer.get(Pos::new(2, 0)), None);
        assert_eq!(layer.to_string(), ".#\n..");
    }

    #[test]
    fn endpoints_survive_annotations() {
        let mut layer = TagLayer::from_grid(&grid());
        layer.paint(Pos::new(0, 0), Role::Start);
        layer.paint(Pos::new(0, 0), Role::Explored);
        layer.paint(Pos::new(1, 0), Role::Frontier);
        layer.paint(Pos::new(1, 0), Role::Explored);
        layer.paint(Pos::new(7, 7), Role::Solution);
        assert_eq!(layer.get(Pos::new(0, 0)), Some(Role::Start));
        assert_eq!(layer.get(Pos::new(1, 0)), Some(Role::Explored));
        assert_eq!(layer.count(Role::Explored), 1);
        assert_eq!(layer.to_string(), "S#\nx.");
    }

    #[test]
    fn reset_clears_annotations() {
        let g = grid();
        let mut layer = TagLayer::from_grid(&g);
        layer.paint(Pos::new(1, 1), Role::Solution);
        layer.reset(&g);
        assert_eq!(layer, TagLayer::from_grid(&g));
    }

    #[test]
    fn role_names_and_glyphs() {
        assert_eq!(Role::Solution.to_string(), "solution");
        assert_eq!(Role::Frontier.glyph(), 'o');
        assert_eq!(Role::Stop.glyph(), 'G');
    }
}
