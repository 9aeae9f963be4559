/// Сохранение выгрузок (CSV с сервера) в файл через браузер
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const BOM: char = '\u{FEFF}';

/// Добавляет UTF-8 BOM, чтобы Excel корректно показывал кириллицу
pub fn with_bom(content: &str) -> String {
    if content.starts_with(BOM) {
        content.to_string()
    } else {
        format!("{}{}", BOM, content)
    }
}

/// Сохраняет текст как файл `filename` и инициирует скачивание
pub fn download_text_file(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let blob = create_blob(&with_bom(content), mime)?;
    download_blob(&blob, filename)
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Не удалось создать файл: {:?}", e))
}

/// Временная ссылка `<a download>`: добавить, кликнуть, удалить
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Нет объекта window")?;
    let document = window.document().ok_or("Нет объекта document")?;
    let body = document.body().ok_or("Нет элемента body")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Не удалось создать ссылку: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Не удалось создать ссылку: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Не удалось создать ссылку: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("{:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("{:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("{:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_added_once() {
        let once = with_bom("id;name\n");
        assert!(once.starts_with('\u{FEFF}'));
        assert_eq!(with_bom(&once), once);
    }
}
