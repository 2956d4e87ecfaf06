use crate::domain::device::{Device, HwInfo, RunInfo};
use crate::extensions::timestamp_ext::UnixTimestamp;
use std::fmt::{Display, Formatter, Result};

// Multi-line dump for logging, absent values are written as "is Null" or "null" instead of being left out
impl Display for Device {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "id={}", self.id)?;
        writeln!(f, "description={:?}", self.description)?;
        writeln!(f, "location={:?}", self.location)?;
        writeln!(f, "serial={:?}", self.serial)?;
        writeln!(f, "status={:?}", self.status)?;
        writeln!(f, "is {}online", if self.is_online { "" } else { "not " })?;
        match self.is_synced {
            Some(is_synced) => writeln!(f, "is_synced={}", is_synced)?,
            None => writeln!(f, "is_synced=null")?,
        }

        if self.maintenance.is_empty() {
            writeln!(f, "maintenance strings: none")?;
        } else {
            writeln!(f, "maintenance strings:")?;
            for (index, flag) in self.maintenance.iter().enumerate() {
                writeln!(f, "\t{}\t{:?}", index, flag)?;
            }
        }

        match &self.run {
            Some(run) => fmt_run(f, run)?,
            None => writeln!(f, "run is Null")?,
        }
        match &self.userdata {
            Some(userdata) => writeln!(f, "userdata={}", userdata)?,
            None => writeln!(f, "userdata is Null")?,
        }
        writeln!(f, "reboot at {}", self.reboot.to_utc_string())?;

        match &self.geo {
            Some(geo) => writeln!(f, "geo:\n\tlat={}, lon={}, source={:?}", geo.lat, geo.lon, geo.source)?,
            None => writeln!(f, "geo is Null")?,
        }
        match &self.setup {
            Some(setup) => writeln!(
                f,
                "setup:\n\tid={}, name={:?}, updated at {}",
                setup.id,
                setup.name,
                setup.updated.to_utc_string()
            )?,
            None => writeln!(f, "setup is Null")?,
        }
        match &self.hw {
            Some(hw) => fmt_hw(f, hw)?,
            None => writeln!(f, "hw is Null")?,
        }

        writeln!(
            f,
            "offline:\n\tlicensed={}, plan={:?}, max_offline={} days, chargeable={} days",
            self.offline.licensed, self.offline.plan, self.offline.max_offline, self.offline.chargeable
        )?;
        writeln!(f, "upgrade_blocked={} days", self.upgrade_blocked)
    }
}

fn fmt_run(f: &mut Formatter<'_>, run: &RunInfo) -> Result {
    writeln!(f, "run:")?;
    writeln!(f, "\tchannel={:?}", run.channel)?;
    writeln!(f, "\tpublic_addr={:?}", run.public_addr)?;
    writeln!(f, "\tresolution={:?}", run.resolution)?;
    writeln!(f, "\trestarted at {}", run.restarted.to_utc_string())?;
    writeln!(f, "\ttag={:?}", run.tag)?;
    writeln!(f, "\tversion={:?}", run.version)?;
    writeln!(f, "\tpi_revision={:?}", run.pi_revision)
}

fn fmt_hw(f: &mut Formatter<'_>, hw: &HwInfo) -> Result {
    let memory = hw.memory.map_or_else(|| "null".to_string(), |memory| format!("{}MB", memory));
    writeln!(
        f,
        "hw:\n\ttype={}, model={}, memory={}, platform={}",
        quoted_or_null(&hw.hw_type),
        quoted_or_null(&hw.model),
        memory,
        quoted_or_null(&hw.platform)
    )?;

    if hw.features.is_empty() {
        return writeln!(f, "\tfeatures: none");
    }
    writeln!(f, "\tfeatures:")?;
    for feature in &hw.features {
        writeln!(f, "\t\t{:?}", feature)?;
    }
    Ok(())
}

fn quoted_or_null(value: &Option<String>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "null".to_string(),
    }
}
