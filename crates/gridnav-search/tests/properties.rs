//! Property tests against a brute-force distance reference on small grids.

use gridnav_core::{Grid, Pos, export_grid, parse_grid};
use gridnav_search::{Heuristic, SearchError, Solution, Strategy as Route};
use proptest::prelude::*;

/// Shortest step count by repeated relaxation until nothing changes.
fn reference_distance(g: &Grid, start: Pos, stop: Pos) -> Option<usize> {
    let mut dist = vec![usize::MAX; g.rows() * g.cols()];
    dist[g.index(start)?] = 0;
    loop {
        let mut changed = false;
        for cell in g.cells() {
            let Some(i) = g.index(cell.pos) else { continue };
            if !cell.passable || dist[i] == usize::MAX {
                continue;
            }
            for n in cell.pos.neighbors_4() {
                if !g.is_passable(n) {
                    continue;
                }
                let Some(j) = g.index(n) else { continue };
                if dist[i] + 1 < dist[j] {
                    dist[j] = dist[i] + 1;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    let d = dist[g.index(stop)?];
    (d != usize::MAX).then_some(d)
}

fn assert_route(g: &Grid, start: Pos, stop: Pos, sol: &Solution) -> Result<(), TestCaseError> {
    prop_assert_eq!(sol.path.first().map(|c| c.pos), Some(start));
    prop_assert_eq!(sol.path.last().map(|c| c.pos), Some(stop));
    for c in &sol.path {
        prop_assert!(g.is_passable(c.pos), "wall {} on route", c.pos);
    }
    for w in sol.path.windows(2) {
        prop_assert!(w[0].pos.is_adjacent(w[1].pos), "{} -> {}", w[0].pos, w[1].pos);
    }
    prop_assert!(sol.expanded <= g.rows() * g.cols());
    prop_assert!(sol.expanded >= sol.len());
    Ok(())
}

prop_compose! {
    fn arb_grid()(rows in 1usize..=6, cols in 1usize..=6)
                 (cells in prop::collection::vec(prop::bool::weighted(0.7), rows * cols),
                  rows in Just(rows),
                  cols in Just(cols)) -> Grid {
        Grid::from_fn(rows, cols, |p| cells[p.row as usize * cols + p.col as usize])
            .expect("non-empty grid")
    }
}

prop_compose! {
    fn arb_case()(grid in arb_grid(),
                  a in any::<prop::sample::Index>(),
                  b in any::<prop::sample::Index>()) -> (Grid, Pos, Pos) {
        let mut grid = grid;
        if grid.count_passable() == 0 {
            grid.set_passable((0, 0), true).expect("origin in bounds");
        }
        let open: Vec<Pos> = grid.cells().filter(|c| c.passable).map(|c| c.pos).collect();
        let start = open[a.index(open.len())];
        let stop = open[b.index(open.len())];
        (grid, start, stop)
    }
}

proptest! {
    #[test]
    fn bfs_matches_reference((g, start, stop) in arb_case()) {
        let expected = reference_distance(&g, start, stop);
        match (Route::Bfs.search(&g, start, stop), expected) {
            (Ok(sol), Some(d)) => {
                prop_assert_eq!(sol.steps(), d);
                assert_route(&g, start, stop, &sol)?;
            }
            (Err(SearchError::NoPathExists { .. }), None) => {}
            (got, want) => prop_assert!(false, "bfs gave {:?}, reference {:?}", got, want),
        }
    }

    #[test]
    fn astar_is_optimal((g, start, stop) in arb_case()) {
        let bfs = Route::Bfs.search(&g, start, stop);
        for h in [Heuristic::Euclidean, Heuristic::Manhattan] {
            let astar = Route::AStar(h).search(&g, start, stop);
            match (&bfs, &astar) {
                (Ok(b), Ok(a)) => {
                    prop_assert_eq!(a.len(), b.len(), "{}", h);
                    assert_route(&g, start, stop, a)?;
                }
                (Err(b), Err(a)) => prop_assert_eq!(a, b),
                _ => prop_assert!(false, "bfs {:?} vs astar {:?}", bfs, astar),
            }
        }
    }

    #[test]
    fn uninformed_and_greedy_find_valid_routes((g, start, stop) in arb_case()) {
        let reachable = reference_distance(&g, start, stop).is_some();
        for s in [Route::Dfs, Route::Greedy(Heuristic::Euclidean), Route::Greedy(Heuristic::Manhattan)] {
            match s.search(&g, start, stop) {
                Ok(sol) => {
                    prop_assert!(reachable, "{} found a route to an unreachable cell", s);
                    assert_route(&g, start, stop, &sol)?;
                }
                Err(SearchError::NoPathExists { .. }) => prop_assert!(!reachable, "{} missed a route", s),
                Err(e) => prop_assert!(false, "{}: {}", s, e),
            }
        }
    }

    #[test]
    fn grid_file_round_trip(g in arb_grid()) {
        let text = export_grid(&g);
        let back = parse_grid(&text).expect("exported grid parses");
        prop_assert_eq!(&back, &g);
        prop_assert_eq!(export_grid(&back), text);
    }
}
