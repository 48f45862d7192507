// src/scanner.rs
//
// Capacidade de captura de código de barras, desacoplada de qualquer
// biblioteca de decodificação. O decodificador por vídeo ao vivo fica do lado
// do navegador; deste lado da fronteira existe só o contrato, e a entrada
// manual, que é uma implementação de primeira classe dele, não um fallback
// de segunda categoria.

pub type ScanCallback = Box<dyn FnMut(&str) + Send>;
pub type ScanErrorCallback = Box<dyn FnMut(&str) + Send>;

pub trait ScanSource {
    // Inicia uma sessão de captura. Exatamente um dos callbacks é chamado
    // por leitura; o handle devolvido encerra a sessão.
    fn start_scan(&self, on_detected: ScanCallback, on_error: ScanErrorCallback) -> ScanHandle;
}

pub struct ScanHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl ScanHandle {
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn with_cancel(cancel: Box<dyn FnOnce() + Send>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

// Entrada manual: o usuário digita o código e a "leitura" dispara na hora.
pub struct ManualEntry {
    code: String,
}

impl ManualEntry {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl ScanSource for ManualEntry {
    fn start_scan(
        &self,
        mut on_detected: ScanCallback,
        mut on_error: ScanErrorCallback,
    ) -> ScanHandle {
        let code = self.code.trim();
        if code.is_empty() {
            on_error("Nenhum código informado.");
        } else {
            on_detected(code);
        }
        // Sessão síncrona: não há nada para cancelar depois.
        ScanHandle::noop()
    }
}
