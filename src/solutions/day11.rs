use std::collections::HashMap;

use aoc_support::parsing::parse_input_lines;
use aoc_support::runner::puzzle;
use aoc_support::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;

use crate::checked_math::Overflow;

#[puzzle(
    title = "Day 11: Reactor",
    parser = Devices,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2025<11> {}

/*
Input lists each device and the devices its outputs connect to, e.g. `bbb: ddd eee`. Data only
flows forward through the outputs, and every path through the devices ends at the device `out`.
*/

#[derive(Error, Debug)]
enum DeviceError {
    #[error("device line is not formatted as 'name: outputs': {0:?}")]
    InvalidLine(String),

    #[error("no device named {0:?}")]
    UnknownDevice(&'static str),

    #[error("device outputs form a loop through {0:?}")]
    Loop(String),
}

struct Devices {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl Devices {
    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.indices.insert(name.to_string(), index);
        index
    }

    fn find(&self, name: &'static str) -> Result<NodeIndex, DeviceError> {
        self.indices
            .get(name)
            .copied()
            .ok_or(DeviceError::UnknownDevice(name))
    }

    /// Count the paths from `from` to `to` that pass through every device in `via`.
    ///
    /// Paths are counted per device in topological order, keyed by which of `via` they have
    /// passed so far.
    fn count_paths(
        &self,
        from: &'static str,
        to: &'static str,
        via: &[&'static str],
    ) -> DynamicResult<u64> {
        let from = self.find(from)?;
        let to = self.find(to)?;
        let via = via
            .iter()
            .map(|&name| self.find(name))
            .collect::<Result<Vec<_>, _>>()?;
        let visit_mask = |node: NodeIndex| -> u32 {
            via.iter()
                .enumerate()
                .filter(|&(_, &required)| required == node)
                .fold(0, |mask, (bit, _)| mask | 1 << bit)
        };
        let all_visited = (1_u32 << via.len()) - 1;

        let order = toposort(&self.graph, None)
            .map_err(|cycle| DeviceError::Loop(self.graph[cycle.node_id()].clone()))?;

        let mut paths: Vec<HashMap<u32, u64>> = vec![HashMap::new(); self.graph.node_count()];
        paths[from.index()].insert(visit_mask(from), 1);
        for node in order {
            let arriving: Vec<(u32, u64)> = paths[node.index()]
                .iter()
                .map(|(&mask, &count)| (mask, count))
                .collect();
            for next in self.graph.neighbors(node) {
                for &(mask, count) in &arriving {
                    let entry = paths[next.index()]
                        .entry(mask | visit_mask(next))
                        .or_default();
                    *entry = entry.checked_add(count).ok_or(Overflow("path count"))?;
                }
            }
        }

        Ok(paths[to.index()]
            .get(&all_visited)
            .copied()
            .unwrap_or_default())
    }
}

impl ParseData for Devices {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut devices = Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        };
        let connections = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (name, outputs) = line
                .split_once(':')
                .ok_or_else(|| DeviceError::InvalidLine(line.to_string()))?;
            let outputs: Vec<String> = outputs.split_whitespace().map(str::to_string).collect();
            Ok((name.trim().to_string(), outputs))
        })
        .collect::<Result<Vec<_>, _>>()?;

        for (name, outputs) in connections {
            let source = devices.node(&name);
            for output in &outputs {
                let target = devices.node(output);
                devices.graph.add_edge(source, target, ());
            }
        }
        Ok(devices)
    }
}

/*
For part 1, count every path leading from the device `you` to `out`.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Devices;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.count_paths("you", "out", &[])
    }
}

/*
For part 2, count the paths from the server rack `svr` to `out` that visit both the digital to
analog converter `dac` and the fast Fourier transform `fft`, in any order.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Devices;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.count_paths("svr", "out", &["dac", "fft"])
    }
}
