pub const BTN_OPEN: &str = "Abrir imágenes";
pub const BTN_CLOSE: &str = "Cerrar";
pub const BTN_PREV: &str = "Anterior";
pub const BTN_NEXT: &str = "Siguiente";

pub const FILTER_IMAGES: &str = "Imagen";

pub const TEXT_OPENIMG: &str = "Abre una o varias imágenes para comenzar";
pub const TEXT_CLICK_TO_ENLARGE: &str = "Haz clic en la imagen para verla a pantalla completa";
pub const TEXT_ESC_TO_CLOSE: &str = "Esc para cerrar, flechas para navegar";
pub const TEXT_IMAGE_UNAVAILABLE: &str = "Imagen no disponible";
