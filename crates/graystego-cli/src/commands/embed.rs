use std::path::PathBuf;

use clap::{Args, ValueEnum};
use graystego_core::EmbedWidth;

use crate::CliResult;

/// Embeds a secret bit stream into a gray-scale cover matrix
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Cover matrix file with 256x256 whitespace-separated intensities, used readonly.
    #[arg(short = 'i', long = "in", value_name = "cover file", required = true)]
    pub cover: PathBuf,

    /// Secret bit stream file, whitespace-separated binary digits
    #[arg(
        short = 's',
        long = "secret",
        value_name = "secret file",
        required = true
    )]
    pub secret: PathBuf,

    /// Final stego image will be stored as plain PGM file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output pgm file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// How many least significant bits of every pixel carry secret digits
    #[arg(
        short = 'w',
        long = "width",
        value_name = "bits per pixel",
        default_value = "2"
    )]
    pub width: WidthArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum WidthArg {
    /// Single-bit substitution
    #[value(name = "1")]
    One,
    /// Two-bit substitution with optimal pixel adjustment
    #[value(name = "2")]
    Two,
}

impl From<WidthArg> for EmbedWidth {
    fn from(value: WidthArg) -> Self {
        match value {
            WidthArg::One => EmbedWidth::OneBit,
            WidthArg::Two => EmbedWidth::TwoBit,
        }
    }
}

impl EmbedArgs {
    pub fn run(self) -> CliResult<()> {
        let report = graystego_core::commands::embed(
            &self.cover,
            &self.secret,
            &self.write_to_file,
            EmbedWidth::from(self.width),
        )?;

        match report.with_adjustment {
            Some(adjusted) => {
                println!(
                    "MSE for 2-LSB substitution (with OPAP)     = {:.4}",
                    adjusted.mse
                );
                println!(
                    "PSNR for 2-LSB substitution (with OPAP)    = {:.4}",
                    adjusted.psnr
                );
                println!(
                    "MSE for 2-LSB substitution (without OPAP)  = {:.4}",
                    report.substitution.mse
                );
                println!(
                    "PSNR for 2-LSB substitution (without OPAP) = {:.4}",
                    report.substitution.psnr
                );
            }
            None => {
                println!(
                    "MSE for 1-LSB substitution  = {:.4}",
                    report.substitution.mse
                );
                println!(
                    "PSNR for 1-LSB substitution = {:.4}",
                    report.substitution.psnr
                );
            }
        }

        Ok(())
    }
}
