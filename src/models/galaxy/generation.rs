use rand::rngs::StdRng;
use rand::Rng;

use crate::models::constants::{Quadrant, SectorType, ShipType, GALAXY_SECTORS};
use crate::models::difficulty::DifficultyConfig;
use crate::models::sector_grid::SectorGrid;

/// Generate the 128-sector galaxy for one difficulty table.
///
/// Placement attempts may land on a starbase (skipped) or on a sector that
/// was already populated (overwritten), so the occupied count can come out
/// below the attempt count.
pub fn generate_sectors(config: DifficultyConfig, rng: &mut StdRng) -> Vec<SectorGrid> {
    let mut sectors: Vec<SectorGrid> = (1..=GALAXY_SECTORS).map(SectorGrid::empty).collect();

    for quadrant in Quadrant::ALL {
        let idx = rng.gen_range(quadrant.index_range());
        sectors[idx].sector_type = SectorType::Starbase;
        sectors[idx].number_of_objects = 1;
    }

    for _ in 0..config.occupied_sector_attempts {
        let idx = rng.gen_range(0..GALAXY_SECTORS);
        if sectors[idx].sector_type == SectorType::Starbase {
            continue;
        }
        populate_enemy_sector(&mut sectors[idx], config.max_ships_per_sector, rng);
    }

    sectors
}

/// Roll a roster for one sector: ship count, tier, then one type per slot.
fn populate_enemy_sector(sector: &mut SectorGrid, max_ships: u32, rng: &mut StdRng) {
    let ship_count = rng.gen_range(1..=max_ships.max(1));

    let (sector_type, fighter_chance) = match rng.gen_range(1..=3) {
        3 => (SectorType::Enemy3, 2),
        2 => (SectorType::Enemy2, 1),
        _ => (SectorType::Enemy, 0),
    };

    let enemy_types: Vec<ShipType> = (0..ship_count)
        .map(|_| ShipType::from_roll(rng.gen_range(0..=fighter_chance)))
        .collect();

    sector.sector_type = sector_type;
    sector.number_of_objects = enemy_types.len();
    sector.enemy_types = Some(enemy_types);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn enemy_tier_limits_ship_types() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let mut sector = SectorGrid::empty(1);
            populate_enemy_sector(&mut sector, 7, &mut rng);
            let allowed: &[ShipType] = match sector.sector_type {
                SectorType::Enemy => &[ShipType::Scout],
                SectorType::Enemy2 => &[ShipType::Scout, ShipType::Fighter],
                SectorType::Enemy3 => &ShipType::ALL,
                other => panic!("unexpected sector type {:?}", other),
            };
            for t in sector.enemies() {
                assert!(allowed.contains(t), "{:?} in {:?}", t, sector.sector_type);
            }
        }
    }

    #[test]
    fn ship_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let mut sector = SectorGrid::empty(1);
            populate_enemy_sector(&mut sector, 4, &mut rng);
            assert!((1..=4).contains(&sector.number_of_objects));
            assert!(sector.is_consistent());
        }
    }

    #[test]
    fn starbases_never_overwritten() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sectors = generate_sectors(DifficultyConfig::for_level(5), &mut rng);
            let starbases = sectors
                .iter()
                .filter(|s| s.sector_type == SectorType::Starbase)
                .count();
            assert_eq!(starbases, 4, "seed {}", seed);
        }
    }

    #[test]
    fn occupied_count_bounded_by_attempts() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let config = DifficultyConfig::for_level(2);
            let sectors = generate_sectors(config, &mut rng);
            let occupied = sectors.iter().filter(|s| s.is_occupied()).count();
            assert!(occupied as u32 <= config.occupied_sector_attempts);
        }
    }
}
