//! Growable GPU buffer of instance records, generic over the record type so
//! both pipelines share one implementation.

use std::marker::PhantomData;
use std::ops::Range;

use crate::gpu::RendererError;
use crate::instance::InstanceRecord;

/// Smallest capacity a buffer is ever created with.
const MIN_CAPACITY: usize = 16;

pub struct InstanceBuffer<T: InstanceRecord> {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T: InstanceRecord> InstanceBuffer<T> {
    pub fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let limit = max_instances::<T>(device.limits().max_buffer_size);
        let capacity = capacity.max(MIN_CAPACITY).min(limit);
        Self {
            buffer: create_buffer::<T>(device, capacity),
            capacity,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Replace the buffer contents with `instances`, growing it first if
    /// they do not fit. Call once per frame before any draw reads it.
    ///
    /// Fails without touching the buffer when `instances` would not fit in
    /// the largest buffer the device allows.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[T],
    ) -> Result<(), RendererError> {
        let needed = instances.len();
        if needed > self.capacity {
            let grown =
                checked_capacity::<T>(self.capacity, needed, device.limits().max_buffer_size)?;
            tracing::info!(
                label = T::LABEL,
                from = self.capacity,
                to = grown,
                "growing instance buffer"
            );
            self.buffer = create_buffer::<T>(device, grown);
            self.capacity = grown;
        }

        self.len = needed;
        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
        Ok(())
    }

    /// Byte slice covering the instances in `range`, for binding one batch
    /// at vertex slot 1.
    pub fn slice(&self, range: Range<u32>) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(byte_range::<T>(range))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn create_buffer<T: InstanceRecord>(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(T::LABEL),
        size: capacity as wgpu::BufferAddress * stride::<T>(),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn stride<T: InstanceRecord>() -> wgpu::BufferAddress {
    std::mem::size_of::<T>() as wgpu::BufferAddress
}

/// Next power of two that holds `needed`, never smaller than `current`.
fn grown_capacity(current: usize, needed: usize) -> usize {
    needed
        .checked_next_power_of_two()
        .unwrap_or(usize::MAX)
        .max(current)
        .max(MIN_CAPACITY)
}

/// Most records of type `T` one buffer of `max_buffer_size` bytes holds.
fn max_instances<T: InstanceRecord>(max_buffer_size: u64) -> usize {
    usize::try_from(max_buffer_size / stride::<T>()).unwrap_or(usize::MAX)
}

/// Capacity to grow to for `needed` records, capped at the device limit.
fn checked_capacity<T: InstanceRecord>(
    current: usize,
    needed: usize,
    max_buffer_size: u64,
) -> Result<usize, RendererError> {
    let limit = max_instances::<T>(max_buffer_size);
    if needed > limit {
        return Err(RendererError::InstanceOverflow {
            label: T::LABEL,
            requested: needed,
            max: limit,
        });
    }
    Ok(grown_capacity(current, needed).min(limit))
}

fn byte_range<T: InstanceRecord>(range: Range<u32>) -> Range<wgpu::BufferAddress> {
    range.start as wgpu::BufferAddress * stride::<T>()..range.end as wgpu::BufferAddress * stride::<T>()
}
