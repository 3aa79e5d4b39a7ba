//! One-shot hardware peripheral initialization.
//!
//! Configures the ADC1 oneshot unit for the smoke and flame sensors and
//! installs the UART driver for the GSM modem, using raw ESP-IDF sys
//! calls. Called once from `main()` before the control loop starts.
//! Indicator GPIOs are owned by `esp-idf-hal` pin drivers instead.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    UartInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::UartInitFailed(rc) => write!(f, "modem UART init failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals(modem_baud: u32) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_adc()?;
        init_uart(modem_baud)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_modem_baud: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path. `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins::SMOKE_ADC_CHANNEL, pins::FLAME_ADC_CHANNEL] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::AdcInitFailed(ret));
        }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=smoke, CH{}=flame)",
        pins::SMOKE_ADC_CHANNEL,
        pins::FLAME_ADC_CHANNEL
    );
    Ok(())
}

/// Raw 12-bit sample. A failed conversion reads as 0.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u32) -> u16 {
    0
}

// ── Modem UART ────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_uart(baud: u32) -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: baud as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };

    let ret = unsafe {
        uart_driver_install(
            pins::MODEM_UART_PORT,
            pins::MODEM_UART_RX_BUF,
            pins::MODEM_UART_TX_BUF,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    let ret = unsafe { uart_param_config(pins::MODEM_UART_PORT, &cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    let ret = unsafe {
        uart_set_pin(
            pins::MODEM_UART_PORT,
            pins::MODEM_UART_TX_GPIO,
            pins::MODEM_UART_RX_GPIO,
            UART_PIN_NO_CHANGE,
            UART_PIN_NO_CHANGE,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    info!("hw_init: modem UART{} at {} baud", pins::MODEM_UART_PORT, baud);
    Ok(())
}

/// Queue bytes on the modem UART. Returns the number of bytes accepted
/// or the negative driver return code.
#[cfg(target_os = "espidf")]
pub fn uart_write(bytes: &[u8]) -> Result<usize, i32> {
    // SAFETY: the driver was installed in init_uart(); the pointer and
    // length describe a live slice for the duration of the call.
    let n = unsafe {
        uart_write_bytes(
            pins::MODEM_UART_PORT,
            bytes.as_ptr().cast(),
            bytes.len(),
        )
    };
    if n < 0 { Err(n) } else { Ok(n as usize) }
}

#[cfg(not(target_os = "espidf"))]
pub fn uart_write(bytes: &[u8]) -> Result<usize, i32> {
    Ok(bytes.len())
}
