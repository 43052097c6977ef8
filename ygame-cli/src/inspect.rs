//! Board command - print topology and geometry for a given size

use anyhow::Result;
use clap::Args;

use ygame_core::{viewport, Side, Topology};

#[derive(Args)]
pub struct BoardArgs {
    /// Board size (cells along each triangle side)
    #[arg(long, default_value = "9")]
    pub size: u8,
}

/// Run board command
pub fn run(args: BoardArgs) -> Result<()> {
    let topology = Topology::new(args.size)?;
    println!("{}", summary(&topology));
    Ok(())
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Top => "top",
        Side::Bottom => "bottom",
    }
}

/// Human-readable topology summary
fn summary(topology: &Topology) -> String {
    let mut lines = vec![format!(
        "board size {}: {} cells",
        topology.size(),
        topology.cell_count()
    )];

    for side in Side::ALL {
        let count = topology
            .cells()
            .iter()
            .filter(|&&cell| topology.sides(cell).contains(side))
            .count();
        lines.push(format!("  {} side: {} cells", side_label(side), count));
    }

    for cell in topology.corners() {
        let sides: Vec<&str> = topology.sides(cell).iter().map(side_label).collect();
        lines.push(format!(
            "  corner ({}, {}): {}",
            cell.q,
            cell.r,
            sides.join("+")
        ));
    }

    let vp = viewport(topology);
    lines.push(format!(
        "  viewport: {:.1} x {:.1} at ({:.1}, {:.1})",
        vp.width, vp.height, vp.min_x, vp.min_y
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let topology = Topology::new(9).unwrap();
        let text = summary(&topology);

        assert!(text.contains("board size 9: 45 cells"));
        assert!(text.contains("left side: 9 cells"));
        assert!(text.contains("corner (0, 0): left+top"));
        assert!(text.contains("corner (8, 0): top+bottom"));
        assert!(text.contains("corner (0, 8): left+bottom"));
    }

    #[test]
    fn test_summary_degenerate_board() {
        let topology = Topology::new(1).unwrap();
        let text = summary(&topology);

        assert!(text.contains("board size 1: 1 cells"));
        assert!(text.contains("corner (0, 0): left+top+bottom"));
    }
}
