use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info};

use crate::color::space::ColorSpace;
use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{ColorscopeError, Result};

/// Ordered color samples sharing one color space, one sequence per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    space: ColorSpace,
    channels: [Vec<i64>; COLOR_CHANNEL_COUNT],
}

impl SampleSet {
    pub fn new(space: ColorSpace) -> Self {
        Self {
            space,
            channels: Default::default(),
        }
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one color. Fails without touching the set unless `color` has
    /// exactly three components.
    pub fn append(&mut self, color: &[i64]) -> Result<()> {
        if color.len() != COLOR_CHANNEL_COUNT {
            return Err(ColorscopeError::Arity {
                expected: COLOR_CHANNEL_COUNT,
                actual: color.len(),
            });
        }
        for (channel, &value) in self.channels.iter_mut().zip(color) {
            channel.push(value);
        }
        Ok(())
    }

    /// Values of channel `index` in append order.
    pub fn channel(&self, index: usize) -> &[i64] {
        &self.channels[index]
    }

    /// Values of the channel called `name` in this set's color space.
    pub fn channel_by_name(&self, name: &str) -> Option<&[i64]> {
        self.space
            .channel_names()
            .iter()
            .position(|n| *n == name)
            .map(|i| self.channel(i))
    }

    /// Sample `index` as a 3-tuple.
    pub fn get(&self, index: usize) -> Option<[i64; 3]> {
        (index < self.len()).then(|| {
            [
                self.channels[0][index],
                self.channels[1][index],
                self.channels[2][index],
            ]
        })
    }
}

/// Writes `{"format": tag, "channels": {name: [...], ...}}` with channel keys
/// in the color space's own order.
impl Serialize for SampleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        struct Channels<'a>(&'a SampleSet);

        impl Serialize for Channels<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                let names = self.0.space.channel_names();
                let mut map = serializer.serialize_map(Some(names.len()))?;
                for (name, values) in names.iter().zip(&self.0.channels) {
                    map.serialize_entry(name, values)?;
                }
                map.end()
            }
        }

        let mut record = serializer.serialize_struct("SampleSet", 2)?;
        record.serialize_field("format", self.space.tag())?;
        record.serialize_field("channels", &Channels(self))?;
        record.end()
    }
}

/// A sample file as loaded from disk, before any validation.
///
/// The format tag and channel keys are checked by the consumer (see
/// [`crate::drift::drift`] and `SampleSet::try_from`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub format: String,
    pub channels: BTreeMap<String, Vec<i64>>,
}

impl SampleRecord {
    pub fn channel(&self, name: &str) -> Option<&[i64]> {
        self.channels.get(name).map(Vec::as_slice)
    }
}

impl TryFrom<SampleRecord> for SampleSet {
    type Error = ColorscopeError;

    fn try_from(record: SampleRecord) -> Result<Self> {
        let space: ColorSpace = record.format.parse()?;
        let mut set = SampleSet::new(space);
        let mut len = None;
        for (slot, name) in set.channels.iter_mut().zip(space.channel_names()) {
            let values = record.channels.get(name).ok_or_else(|| {
                ColorscopeError::Format(format!("{} sample file missing channel '{name}'", space.tag()))
            })?;
            let expected = *len.get_or_insert(values.len());
            if expected != values.len() {
                return Err(ColorscopeError::Format(format!(
                    "channel '{name}' length {} differs from {expected}",
                    values.len()
                )));
            }
            *slot = values.clone();
        }
        Ok(set)
    }
}

/// Append-only sample log bound to an output file.
#[derive(Debug)]
pub struct SampleStore {
    path: PathBuf,
    samples: SampleSet,
}

impl SampleStore {
    /// Start an empty store. Nothing is written until [`SampleStore::write`].
    pub fn create(path: impl Into<PathBuf>, space: ColorSpace) -> Self {
        Self {
            path: path.into(),
            samples: SampleSet::new(space),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn append(&mut self, color: &[i64]) -> Result<()> {
        self.samples.append(color)?;
        debug!(index = self.samples.len() - 1, ?color, "Sample appended");
        Ok(())
    }

    /// Serialize all samples to the store's file, replacing previous contents.
    pub fn write(&self) -> Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut out, &self.samples)?;
        out.flush()?;
        info!(
            path = %self.path.display(),
            samples = self.samples.len(),
            format = self.samples.space().tag(),
            "Samples written"
        );
        Ok(())
    }
}

/// Load a sample file.
pub fn load(path: &Path) -> Result<SampleRecord> {
    if !path.exists() {
        return Err(ColorscopeError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
