//! Buffer circular de capacidad fija
//!
//! Conserva las `N` muestras más recientes; al llenarse, cada inserción
//! descarta la más antigua.

/// Buffer circular sobre un array, sin reservas dinámicas
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    data: [T; N],
    /// Posición de la siguiente escritura
    head: usize,
    len: usize,
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            head: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserta una muestra, descartando la más antigua si el buffer está lleno
    pub fn push(&mut self, value: T) {
        if N == 0 {
            return;
        }
        self.data[self.head] = value;
        self.head = (self.head + 1) % N;
        if self.len < N {
            self.len += 1;
        }
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Itera desde la muestra más antigua a la más reciente
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.recent(self.len)
    }

    /// Itera las últimas `count` muestras (o todas si hay menos), en orden
    pub fn recent(&self, count: usize) -> impl Iterator<Item = T> + '_ {
        let count = count.min(self.len);
        let start = (self.head + N - count) % N.max(1);
        (0..count).map(move |i| self.data[(start + i) % N])
    }

    /// Copia de las últimas `count` muestras en orden cronológico
    pub fn recent_vec(&self, count: usize) -> Vec<T> {
        self.recent(count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_first() {
        let mut buffer: RingBuffer<u32, 100> = RingBuffer::new();
        for sample in 1..=150 {
            buffer.push(sample);
        }

        assert_eq!(buffer.len(), 100);
        let held: Vec<u32> = buffer.iter().collect();
        let expected: Vec<u32> = (51..=150).collect();
        assert_eq!(held, expected);
    }

    #[test]
    fn test_recent_window() {
        let mut buffer: RingBuffer<u16, 5> = RingBuffer::new();
        for sample in 0..7 {
            buffer.push(sample);
        }

        assert_eq!(buffer.recent_vec(3), vec![4, 5, 6]);
        assert_eq!(buffer.recent_vec(10), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_partial_fill_and_clear() {
        let mut buffer: RingBuffer<u16, 4> = RingBuffer::new();
        buffer.push(10);
        buffer.push(20);
        assert_eq!(buffer.recent_vec(4), vec![10, 20]);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.iter().count(), 0);
        assert_eq!(buffer.capacity(), 4);
    }
}
