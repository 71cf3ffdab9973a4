//! Partitioning properties over many component layouts.
//!
//! Layouts come from a seeded generator so that every run checks the same set of
//! component widths, path counts and cell budgets.

use pangenome_schematic::schematic::partition::{bins_per_file, cut_points};
use pangenome_schematic::{Bin, Component, LinkColumn, PangenomeSchematic};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn make_schematic(widths: &[usize], paths: usize) -> PangenomeSchematic {
    let mut components = Vec::new();
    let mut first = 1;
    for &width in widths {
        let last = first + width - 1;
        let mut component = Component::new(first, last);
        for row in 0..paths {
            let coverage = if row % 2 == 0 { 1.0 } else { 0.0 };
            component.push_row(vec![Bin::new(coverage, 0.0, 1, 10); width]);
        }
        component
            .departures
            .push(LinkColumn::new(last, last + 1, vec![true; paths]));
        components.push(component);
        first = last + 1;
    }
    let names = (0..paths).map(|i| format!("sample{i}#1")).collect();
    PangenomeSchematic::new(1000, names, components)
}

fn layouts() -> Vec<(Vec<usize>, usize, usize)> {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut layouts = Vec::new();
    for component_count in [1, 2, 3, 7, 20, 64] {
        for max_width in [1, 3, 10, 40] {
            for paths in [1, 2, 5] {
                for cells in [1, 4, 10, 33, 100, 1000] {
                    let widths = (0..component_count)
                        .map(|_| rng.gen_range(1..=max_width))
                        .collect();
                    layouts.push((widths, paths, cells));
                }
            }
        }
    }
    layouts
}

#[test]
fn test_partitions_cover_all_bins_in_order() {
    for (widths, paths, cells) in layouts() {
        let mut schematic = make_schematic(&widths, paths);
        let component_count = schematic.components.len();
        let (partitions, entries) = schematic.split(cells).unwrap();

        assert!(!partitions.is_empty());
        assert_eq!(partitions.len(), entries.len());

        let mut next_bin = 1;
        let mut seen_components = 0;
        for (partition, entry) in partitions.iter().zip(&entries) {
            assert!(!partition.components.is_empty(), "{widths:?} {cells}");
            assert_eq!(partition.first_bin, next_bin, "{widths:?} {cells}");
            assert_eq!(entry.first_bin, partition.first_bin);
            assert_eq!(entry.file, partition.file);
            next_bin = partition.last_bin + 1;
            seen_components += partition.components.len();
        }
        let total: usize = widths.iter().sum();
        assert_eq!(next_bin, total + 1, "{widths:?} {cells}");
        assert_eq!(seen_components, component_count);
    }
}

#[test]
fn test_index_entries_strictly_increase() {
    for (widths, paths, cells) in layouts() {
        let mut schematic = make_schematic(&widths, paths);
        let (_, entries) = schematic.split(cells).unwrap();
        for pair in entries.windows(2) {
            assert!(pair[0].first_bin < pair[1].first_bin);
            assert_ne!(pair[0].file, pair[1].file);
        }
    }
}

#[test]
fn test_partition_count_never_exceeds_total_nr_files() {
    for (widths, paths, cells) in layouts() {
        let mut schematic = make_schematic(&widths, paths);
        let count = schematic.split(cells).unwrap().0.len();
        assert!(count <= schematic.total_nr_files, "{widths:?} {cells}");

        let budget = bins_per_file(cells, paths);
        if widths.iter().all(|&w| w == budget) {
            assert_eq!(count, schematic.total_nr_files, "{widths:?} {cells}");
        }
    }
}

#[test]
fn test_cut_points_end_at_component_count() {
    for (widths, paths, cells) in layouts() {
        let schematic = make_schematic(&widths, paths);
        let borders: Vec<usize> = schematic.components.iter().map(|c| c.last_bin).collect();
        let last_bin = *borders.last().unwrap();
        let cuts = cut_points(&borders, last_bin, bins_per_file(cells, paths));

        assert_eq!(cuts[0], 0);
        assert_eq!(*cuts.last().unwrap(), borders.len(), "{widths:?} {cells}");
        assert!(cuts.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_split_is_deterministic() {
    for (widths, paths, cells) in layouts().into_iter().step_by(17) {
        let mut a = make_schematic(&widths, paths);
        let mut b = make_schematic(&widths, paths);
        let (parts_a, entries_a) = a.split(cells).unwrap();
        let (parts_b, entries_b) = b.split(cells).unwrap();

        assert_eq!(entries_a, entries_b);
        let dumped_a: Vec<String> = parts_a
            .iter()
            .map(|p| serde_json::to_string(p).unwrap())
            .collect();
        let dumped_b: Vec<String> = parts_b
            .iter()
            .map(|p| serde_json::to_string(p).unwrap())
            .collect();
        assert_eq!(dumped_a, dumped_b);
    }
}

#[test]
fn test_uniform_components_match_budget() {
    // four components of five bins, two paths, ten cells: one component per file
    let mut schematic = make_schematic(&[5, 5, 5, 5], 2);
    let (partitions, entries) = schematic.split(10).unwrap();
    assert_eq!(partitions.len(), 4);
    assert_eq!(
        entries.iter().map(|e| e.first_bin).collect::<Vec<_>>(),
        [1, 6, 11, 16]
    );
    assert_eq!(schematic.total_nr_files, 4);
}

#[test]
fn test_index_locates_every_bin() {
    for (widths, paths, cells) in layouts().into_iter().step_by(5) {
        let mut schematic = make_schematic(&widths, paths);
        let ranges: Vec<(usize, usize, String)> = {
            let (partitions, _) = schematic.split(cells).unwrap();
            partitions
                .iter()
                .map(|p| (p.first_bin, p.last_bin, p.file.clone()))
                .collect()
        };
        let dir = tempfile::tempdir().unwrap();
        let entries: Vec<_> = ranges
            .iter()
            .map(|(first, _, file)| pangenome_schematic::IndexEntry::new(*first, file.clone()))
            .collect();
        let path = schematic.write_index_file(dir.path(), &entries).unwrap();
        let index = pangenome_schematic::Bin2FileIndex::load(&path).unwrap();

        for (first, last, file) in &ranges {
            for bin in *first..=*last {
                assert_eq!(&index.file_for_bin(bin).unwrap().file, file);
            }
        }
        assert!(index.file_for_bin(schematic.last_bin + 1).is_none());
    }
}
