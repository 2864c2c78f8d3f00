//! Plain-text and CSV writers for synthesized designs.

use std::io;
use std::io::Write;

use crate::design::PatchDesign;
use crate::sweep::SweepPoint;

/// Writes the flat `key: value` parameter sheet for one design.
///
/// Lengths are presented at micrometre precision and the truncation edge at
/// 10 µm, matching fabrication-sheet conventions; the design itself is not
/// modified. The truncation line is omitted for linearly polarized designs.
///
/// # Errors
///
/// Propagates I/O errors from the underlying writer.
pub fn write_parameter_report<W: Write>(mut w: W, design: &PatchDesign) -> io::Result<()> {
    writeln!(w, "Frequency (GHz): {:.3}", design.frequency.ghz())?;
    writeln!(
        w,
        "Substrate thickness (h): {} mm",
        design.substrate.thickness_mm()
    )?;
    writeln!(
        w,
        "Relative Permittivity (εr): {}",
        design.material.relative_permittivity
    )?;
    writeln!(w, "Patch Width (W): {:.3} mm", design.patch.width_mm)?;
    writeln!(w, "Patch Length (L): {:.3} mm", design.patch.length_mm)?;
    writeln!(
        w,
        "Substrate Width (W_sub): {:.3} mm",
        design.enclosure.substrate.size.x
    )?;
    writeln!(
        w,
        "Substrate Length (L_sub): {:.3} mm",
        design.enclosure.substrate.size.y
    )?;
    writeln!(
        w,
        "Feed Point wrt Origin (x, y): ({:.3}, {:.3}) mm",
        design.feed.x_mm, design.feed.y_mm
    )?;
    if let Some(truncation) = design.truncation {
        writeln!(w, "Corner Truncation Size: {:.2} mm", truncation.edge_mm)?;
    }
    writeln!(
        w,
        "Effective Dielectric Constant (εeff): {:.3}",
        design.patch.effective_permittivity
    )?;
    writeln!(
        w,
        "Radiation Clearance: {:.3} mm",
        design.enclosure.clearance_mm
    )?;
    writeln!(w, "Material: {}", design.material_name)?;
    writeln!(w, "Loss Tangent: {}", design.material.loss_tangent)?;
    writeln!(
        w,
        "Relative Permeability (μr): {}",
        design.material.relative_permeability
    )?;
    writeln!(w, "Conductivity (σ): {}", design.material.conductivity)?;
    Ok(())
}

/// Writes a frequency sweep to a CSV writer.
///
/// Failed points keep their row so the grid stays rectangular: derived
/// columns are zero and the `ok` column is `false`.
///
/// # Errors
///
/// Propagates I/O errors from the underlying writer.
pub fn write_sweep_csv<W: Write>(mut w: W, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(
        w,
        "f0_hz,width_mm,length_mm,eff_permittivity,feed_y_mm,truncation_mm,clearance_mm,ok"
    )?;
    for point in points {
        match &point.design {
            Ok(design) => writeln!(
                w,
                "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},true",
                point.f0_hz,
                design.patch.width_mm,
                design.patch.length_mm,
                design.patch.effective_permittivity,
                design.feed.y_mm,
                design.truncation.map_or(0.0, |t| t.edge_mm),
                design.enclosure.clearance_mm,
            )?,
            Err(_) => writeln!(
                w,
                "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},false",
                point.f0_hz, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            )?,
        }
    }
    Ok(())
}
