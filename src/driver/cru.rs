//! Clock & reset unit.

use crate::arch::Machine;

/// Magic that arms the first global soft reset when written to
/// CRU_GLB_SRST_FST.
pub const GLB_SRST_FST_VALUE: u32 = 0xFDB9;

/// Fires the first global soft reset. Every core and most of the SoC go
/// back to their reset state; the PMU domain keeps its registers.
///
/// # Safety
///
/// `glb_srst_fst` must be the CRU_GLB_SRST_FST register of the running SoC.
pub unsafe fn global_soft_reset<M: Machine>(machine: &mut M, glb_srst_fst: usize) {
    machine.mmio_write32(glb_srst_fst, GLB_SRST_FST_VALUE);
}
