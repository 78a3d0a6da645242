//! Tests for containers driven by a recording host.

use std::collections::{HashMap, HashSet};

use anyhow::{Result, anyhow, bail};

use super::*;


/// A scene node as the fake host sees it.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub min_width: f32,
    pub max_width: f32,
    pub height: f32,
    pub visible: bool,
    pub managed: bool,
}

impl Node {
    pub const fn new(min_width: f32, height: f32) -> Self {
        Self {
            min_width,
            max_width: f32::INFINITY,
            height,
            visible: true,
            managed: true,
        }
    }

    pub const fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub const fn unmanaged(mut self) -> Self {
        self.managed = false;
        self
    }
}

/// Host that records every placement and can be told to fail measurement.
#[derive(Default)]
pub struct RecordingHost {
    pub order: Vec<u32>,
    pub nodes: HashMap<u32, Node>,
    pub placed: Vec<(u32, Frame)>,
    pub failing: HashSet<u32>,
    /// Handle used to request a pass from inside `place`.
    pub relayout_on_place: Option<LayoutGuard>,
}

impl RecordingHost {
    pub fn with_nodes(nodes: impl IntoIterator<Item = (u32, Node)>) -> Self {
        let mut host = Self::default();
        for (key, node) in nodes {
            host.order.push(key);
            host.nodes.insert(key, node);
        }
        host
    }

    fn node(&self, item: u32) -> Result<Node> {
        if self.failing.contains(&item) {
            bail!("node {item} cannot be measured");
        }
        self.nodes
            .get(&item)
            .copied()
            .ok_or_else(|| anyhow!("node {item} is not attached"))
    }

    /// Last frame placed for `item`.
    pub fn frame(&self, item: u32) -> Option<Frame> {
        self.placed
            .iter()
            .rev()
            .find(|(key, _)| *key == item)
            .map(|(_, frame)| *frame)
    }
}

impl MeasureItem<u32> for RecordingHost {
    fn width_range(&self, item: u32, _probe_width: f32) -> Result<WidthRange> {
        let node = self.node(item)?;
        Ok(WidthRange::new(node.min_width, node.max_width))
    }

    fn preferred_height(&self, item: u32, _width: f32) -> Result<f32> {
        Ok(self.node(item)?.height)
    }
}

impl LayoutHost<u32> for RecordingHost {
    fn children(&self) -> Vec<u32> {
        self.order.clone()
    }

    fn is_visible(&self, item: u32) -> bool {
        self.nodes.get(&item).is_some_and(|node| node.visible)
    }

    fn is_managed(&self, item: u32) -> bool {
        self.nodes.get(&item).is_some_and(|node| node.managed)
    }

    fn place(&mut self, item: u32, frame: Frame) {
        self.placed.push((item, frame));
        if let Some(guard) = &self.relayout_on_place {
            guard.request_layout();
        }
    }
}

/// Container of `width` with default configuration.
pub fn container(width: f32) -> Result<FlexBox<u32>> {
    let mut flex = FlexBox::new();
    flex.resize(width)?;
    Ok(flex)
}

/// Report of a completed pass, or an error for a skipped one.
pub fn completed(outcome: PassOutcome) -> Result<PassReport> {
    match outcome {
        PassOutcome::Completed(report) => Ok(report),
        PassOutcome::Skipped => Err(anyhow!("pass was skipped")),
    }
}
