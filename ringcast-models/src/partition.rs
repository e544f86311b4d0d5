// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Split a ring into contiguous groups of nodes.

use log::info;

use crate::ring::Ring;
use crate::types::{NodeId, RingError, RingResult};

/// An ordered group of node ids.
pub type Partition = Vec<NodeId>;

/// Split the nodes `[0, 1, ..., N-1]` into consecutive groups of `size`
/// nodes; the last group may be smaller. Each node's partition attribute is
/// set to the index of its group.
///
/// `size` must be in the range `1..=N`.
pub fn partition_nodes(ring: &mut Ring, size: usize) -> RingResult<Vec<Partition>> {
    let num_nodes = ring.num_nodes();
    if size == 0 || size > num_nodes {
        return Err(RingError::InvalidPartitionSize { size, num_nodes });
    }

    let node_ids: Vec<NodeId> = (0..num_nodes).collect();
    let partitions: Vec<Partition> = node_ids.chunks(size).map(<[NodeId]>::to_vec).collect();

    for (index, partition) in partitions.iter().enumerate() {
        for &node in partition {
            ring.set_partition(node, index);
        }
    }

    info!("Network partitioned into {} partitions", partitions.len());
    Ok(partitions)
}
